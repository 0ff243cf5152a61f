//! Spotlight construction
//!
//! - [`create_spotlight`]: one light, its aim target and its debug helper
//! - [`create_spotlights`]: an evenly spaced row of lights
//! - [`refresh_helper`] / [`restore_original`]: upkeep after callers move lights

mod color;
mod layout;
mod restore;
mod spotlight;

pub use color::{Color, ParseColorError};
pub use layout::{create_spotlights, Placement, SpotlightLayout};
pub use restore::{refresh_helper, restore_original};
pub use spotlight::{
    create_spotlight, AimTarget, LightShadow, SpotLight, SpotlightConfig, SpotlightHandle,
    DEFAULT_COLOR, DEFAULT_DISTANCE, DEFAULT_INTENSITY, SHADOW_BIAS, SHADOW_MAP_SIZE,
    SHADOW_NORMAL_BIAS, SPOT_ANGLE, SPOT_DECAY, SPOT_PENUMBRA,
};
