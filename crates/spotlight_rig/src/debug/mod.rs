//! Debug module for visualization tools
//!
//! Spotlight helpers and the primitive shapes they draw with.

pub mod draw;
pub mod spot_helper;

pub use draw::DebugShape;
pub use spot_helper::SpotLightHelper;

use crate::scene::Scene;

/// Outline shapes of every helper in `scene`
pub fn collect_helper_shapes(scene: &Scene) -> Vec<DebugShape> {
    scene.helpers().flat_map(|(_, helper)| helper.outline()).collect()
}
