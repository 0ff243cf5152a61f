//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable key for a node stored in a scene.
    ///
    /// Keys are never reused while the scene is alive, so two nodes created
    /// from identical inputs always get distinct keys.
    pub struct NodeId;
}

/// Handle-based arena of scene nodes
pub type NodeArena<T> = SlotMap<NodeId, T>;
