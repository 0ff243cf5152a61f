//! Single spotlight factory
//!
//! Builds one shadow-casting spotlight, its aim target and its debug helper,
//! and attaches all three to a scene. Everything except position, target,
//! intensity, distance and color is fixed.

use crate::debug::SpotLightHelper;
use crate::foundation::collections::NodeId;
use crate::foundation::math::{constants, Vec3};
use crate::lighting::Color;
use crate::scene::{SceneGraph, SceneNode};
use serde::{Deserialize, Serialize};

/// Intensity applied when a config leaves it unset
pub const DEFAULT_INTENSITY: f32 = 8.0;

/// Falloff distance applied when a config leaves it unset
pub const DEFAULT_DISTANCE: f32 = 10.0;

/// Color applied when a config leaves it unset
pub const DEFAULT_COLOR: Color = Color::WARM_WHITE;

/// Beam half-angle in radians (20 degrees)
pub const SPOT_ANGLE: f32 = constants::PI / 9.0;

/// Fraction of the cone that fades at its edge
pub const SPOT_PENUMBRA: f32 = 0.5;

/// Exponent of distance attenuation
pub const SPOT_DECAY: f32 = 0.8;

/// Shadow map resolution, width and height
pub const SHADOW_MAP_SIZE: [u32; 2] = [2048, 2048];

/// Depth bias against shadow acne
pub const SHADOW_BIAS: f32 = -0.001;

/// Normal-offset bias for curved receivers
pub const SHADOW_NORMAL_BIAS: f32 = 0.05;

/// Shadow settings carried by a spotlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightShadow {
    /// Shadow map width and height in texels
    pub map_size: [u32; 2],
    /// Depth bias
    pub bias: f32,
    /// Normal-offset bias
    pub normal_bias: f32,
}

impl Default for LightShadow {
    fn default() -> Self {
        Self {
            map_size: SHADOW_MAP_SIZE,
            bias: SHADOW_BIAS,
            normal_bias: SHADOW_NORMAL_BIAS,
        }
    }
}

/// Cone-shaped light stored in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    /// World position of the light
    pub position: Vec3,
    /// Aim target node
    pub target: NodeId,
    /// Light color
    pub color: Color,
    /// Intensity multiplier
    pub intensity: f32,
    /// Falloff distance; 0 means unbounded
    pub distance: f32,
    /// Cone half-angle in radians
    pub angle: f32,
    /// Edge softness, 0..=1
    pub penumbra: f32,
    /// Attenuation exponent
    pub decay: f32,
    /// Whether the light renders shadows
    pub cast_shadow: bool,
    /// Shadow map settings
    pub shadow: LightShadow,
    /// Position at creation time, for callers that undo later drift
    pub original_position: Vec3,
}

impl SpotLight {
    fn new(position: Vec3, target: NodeId, color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            position,
            target,
            color,
            intensity,
            distance,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
            decay: SPOT_DECAY,
            cast_shadow: true,
            shadow: LightShadow::default(),
            original_position: position,
        }
    }
}

/// Positionable node a spotlight points at
#[derive(Debug, Clone, PartialEq)]
pub struct AimTarget {
    /// World position of the aim point
    pub position: Vec3,
    /// Position at creation time
    pub original_target: Vec3,
}

impl AimTarget {
    /// Create a target at `position`, snapshotting it as the original
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            original_target: position,
        }
    }
}

/// Inputs for [`create_spotlight`]
///
/// Unset optional fields take [`DEFAULT_INTENSITY`], [`DEFAULT_DISTANCE`]
/// and [`DEFAULT_COLOR`]. Values are not validated: a negative intensity
/// or distance is passed through as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightConfig {
    /// Light position
    pub position: Vec3,
    /// Point the light aims at
    pub target: Vec3,
    /// Intensity override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
    /// Falloff distance override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
    /// Color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SpotlightConfig {
    /// Config with every optional field unset
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            intensity: None,
            distance: None,
            color: None,
        }
    }

    /// Set intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Set falloff distance
    #[must_use]
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Set color; `None` keeps the default
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    /// Intensity after defaults
    pub fn intensity(&self) -> f32 {
        self.intensity.unwrap_or(DEFAULT_INTENSITY)
    }

    /// Distance after defaults
    pub fn distance(&self) -> f32 {
        self.distance.unwrap_or(DEFAULT_DISTANCE)
    }

    /// Color after defaults
    pub fn color(&self) -> Color {
        self.color.unwrap_or(DEFAULT_COLOR)
    }
}

/// Keys of the three nodes one spotlight occupies in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpotlightHandle {
    /// The light
    pub light: NodeId,
    /// Its aim target
    pub target: NodeId,
    /// Its debug helper
    pub helper: NodeId,
}

/// Create a spotlight aimed at `config.target` and attach it to `scene`
///
/// Attaches, in order, the aim target, the debug helper and the light. The
/// helper reflects the light as created; see
/// [`refresh_helper`](crate::lighting::refresh_helper) after moving things.
/// Identical configs produce distinct lights.
pub fn create_spotlight<G>(scene: &mut G, config: &SpotlightConfig) -> SpotlightHandle
where
    G: SceneGraph + ?Sized,
{
    let target = scene.add(SceneNode::AimTarget(AimTarget::new(config.target)));

    let light = SpotLight::new(
        config.position,
        target,
        config.color(),
        config.intensity(),
        config.distance(),
    );

    let helper = scene.add(SceneNode::SpotLightHelper(SpotLightHelper::from_light(
        &light,
        config.target,
    )));
    let light_id = scene.add(SceneNode::SpotLight(light));

    log::debug!(
        "Created spotlight {:?} at {:?} aimed at {:?}",
        light_id,
        config.position.as_slice(),
        config.target.as_slice()
    );

    SpotlightHandle {
        light: light_id,
        target,
        helper,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use approx::assert_relative_eq;

    fn sample_config() -> SpotlightConfig {
        SpotlightConfig::new(Vec3::new(1.0, 4.0, -2.0), Vec3::new(1.0, 0.0, -2.0))
    }

    #[test]
    fn test_defaults_applied() {
        let mut scene = Scene::new();
        let handle = create_spotlight(&mut scene, &sample_config());
        let light = scene.spot_light(handle.light).unwrap();

        assert_eq!(light.intensity, 8.0);
        assert_eq!(light.distance, 10.0);
        assert_eq!(light.color.hex(), 0xfff4e5);
    }

    #[test]
    fn test_overrides_applied_without_validation() {
        let mut scene = Scene::new();
        let config = sample_config()
            .with_intensity(-3.0)
            .with_distance(-1.0)
            .with_color(Some(Color::from_hex(0x3366ff)));
        let handle = create_spotlight(&mut scene, &config);
        let light = scene.spot_light(handle.light).unwrap();

        assert_eq!(light.intensity, -3.0);
        assert_eq!(light.distance, -1.0);
        assert_eq!(light.color, Color::from_hex(0x3366ff));
    }

    #[test]
    fn test_fixed_parameters() {
        let mut scene = Scene::new();
        let handle = create_spotlight(&mut scene, &sample_config());
        let light = scene.spot_light(handle.light).unwrap();

        assert_relative_eq!(light.angle, std::f32::consts::PI / 9.0);
        assert_eq!(light.penumbra, 0.5);
        assert_eq!(light.decay, 0.8);
        assert!(light.cast_shadow);
        assert_eq!(light.shadow.map_size, [2048, 2048]);
        assert_eq!(light.shadow.bias, -0.001);
        assert_eq!(light.shadow.normal_bias, 0.05);
    }

    #[test]
    fn test_positions_and_target_link() {
        let mut scene = Scene::new();
        let config = sample_config();
        let handle = create_spotlight(&mut scene, &config);

        let light = scene.spot_light(handle.light).unwrap();
        assert_eq!(light.position, config.position);
        assert_eq!(light.target, handle.target);
        assert_eq!(scene.aim_target(handle.target).unwrap().position, config.target);
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let mut scene = Scene::new();
        let mut config = sample_config();
        let handle = create_spotlight(&mut scene, &config);

        config.position.x = 100.0;
        config.target.y = -50.0;
        scene.spot_light_mut(handle.light).unwrap().position = Vec3::new(9.0, 9.0, 9.0);
        scene.aim_target_mut(handle.target).unwrap().position = Vec3::zeros();

        let light = scene.spot_light(handle.light).unwrap();
        let target = scene.aim_target(handle.target).unwrap();
        assert_eq!(light.original_position, Vec3::new(1.0, 4.0, -2.0));
        assert_eq!(target.original_target, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_attaches_target_helper_light_in_order() {
        let mut scene = Scene::new();
        let handle = create_spotlight(&mut scene, &sample_config());

        assert_eq!(scene.children(), &[handle.target, handle.helper, handle.light]);
        assert!(scene.helper(handle.helper).is_ok());
    }

    #[test]
    fn test_identical_configs_create_distinct_lights() {
        let mut scene = Scene::new();
        let config = sample_config();
        let first = create_spotlight(&mut scene, &config);
        let second = create_spotlight(&mut scene, &config);

        assert_ne!(first.light, second.light);
        assert_ne!(first.target, second.target);
        assert_eq!(scene.node_count(), 6);
        assert!(scene.contains(first.light) && scene.contains(second.light));
    }
}
