//! # Spotlight Rig
//!
//! Spotlight factories for a 3D scene graph.
//!
//! ## Features
//!
//! - **Single lights**: one shadow-casting spotlight with its aim target and
//!   debug helper, attached to a scene in one call
//! - **Rows**: evenly spaced lights along a direction, each aimed by a shared
//!   offset
//! - **Rig files**: whole lighting setups described in TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use spotlight_rig::prelude::*;
//!
//! let mut scene = Scene::new();
//! let key = create_spotlight(
//!     &mut scene,
//!     &SpotlightConfig::new(Vec3::new(0.0, 6.0, 0.0), Vec3::zeros()),
//! );
//! let row = create_spotlights(
//!     &mut scene,
//!     &SpotlightLayout {
//!         start_position: Vec3::zeros(),
//!         direction: Vec3::x(),
//!         count: 3,
//!         spacing: 2.0,
//!         target_offset: Vec3::new(0.0, -1.0, 0.0),
//!         color: None,
//!     },
//! )?;
//!
//! assert_eq!(scene.spot_light(key.light)?.intensity, 8.0);
//! assert_eq!(row.len(), 3);
//! # Ok::<(), RigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod lighting;
pub mod debug;
pub mod rig;

mod error;

pub use error::RigError;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        RigError,
        config::{Config, ConfigError},
        foundation::math::Vec3,
        lighting::{
            create_spotlight, create_spotlights, refresh_helper, restore_original,
            Color, SpotlightConfig, SpotlightHandle, SpotlightLayout,
        },
        rig::{build_rig, RigDescription},
        scene::{Scene, SceneGraph},
    };
}
