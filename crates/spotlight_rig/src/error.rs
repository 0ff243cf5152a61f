//! Error types for rig construction and scene lookups

use crate::config::ConfigError;
use crate::foundation::collections::NodeId;
use crate::foundation::math::Vec3;
use thiserror::Error;

/// Errors raised while building or maintaining a spotlight rig
#[derive(Error, Debug)]
pub enum RigError {
    /// A layout direction with zero length or non-finite components
    #[error("Layout direction {direction:?} cannot be normalized")]
    DegenerateDirection {
        /// The offending direction as supplied
        direction: Vec3,
    },

    /// A handle refers to a node the scene does not hold
    #[error("Scene node {0:?} not found")]
    MissingNode(NodeId),

    /// A handle resolves to a node of the wrong kind
    #[error("Scene node {id:?} is a {found}, expected a {expected}")]
    UnexpectedNode {
        /// Key that was looked up
        id: NodeId,
        /// Node kind the caller asked for
        expected: &'static str,
        /// Node kind actually stored under the key
        found: &'static str,
    },

    /// Rig description could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
