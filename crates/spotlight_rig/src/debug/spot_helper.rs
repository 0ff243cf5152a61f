//! Spotlight cone helper
//!
//! Snapshot of a spotlight's cone taken when the helper is built. It does not
//! follow the light afterwards; rebuild it with
//! [`refresh_helper`](crate::lighting::refresh_helper).

use super::draw::DebugShape;
use crate::foundation::math::{constants, utils, Vec3, Vec4};
use crate::lighting::SpotLight;

/// Number of segments in the rim ring
pub const RIM_SEGMENTS: usize = 32;

/// Number of apex-to-rim spokes
pub const SPOKES: usize = 4;

/// Cone geometry of one spotlight
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLightHelper {
    /// Light position
    pub apex: Vec3,
    /// Unit aim direction; straight down when light and target coincide
    pub axis: Vec3,
    /// Cone height
    pub cone_length: f32,
    /// Rim radius
    pub cone_radius: f32,
    /// Aim point at snapshot time
    pub aim_point: Vec3,
    /// Light color as RGBA
    pub color: Vec4,
}

impl SpotLightHelper {
    /// Build a helper from a light and its aim point
    ///
    /// The cone is as long as the light's distance, or reaches the aim point
    /// when the distance is 0 (unbounded).
    pub fn from_light(light: &SpotLight, aim_point: Vec3) -> Self {
        let to_target = aim_point - light.position;
        let axis = to_target.try_normalize(f32::EPSILON).unwrap_or_else(|| -Vec3::y());
        let cone_length = if light.distance == 0.0 { to_target.norm() } else { light.distance };
        let rgb = light.color.to_rgb();

        Self {
            apex: light.position,
            axis,
            cone_length,
            cone_radius: cone_length * light.angle.tan(),
            aim_point,
            color: Vec4::new(rgb.x, rgb.y, rgb.z, 1.0),
        }
    }

    /// Center of the rim circle
    pub fn rim_center(&self) -> Vec3 {
        self.apex + self.axis * self.cone_length
    }

    /// Line and point primitives outlining the cone
    ///
    /// Emits the axis, [`SPOKES`] apex-to-rim lines, a [`RIM_SEGMENTS`] ring
    /// and a point at the aim target.
    #[allow(clippy::cast_precision_loss)]
    pub fn outline(&self) -> Vec<DebugShape> {
        let u = utils::any_perpendicular(self.axis);
        let v = self.axis.cross(&u);
        let center = self.rim_center();
        let rim_point = |i: usize, n: usize| {
            let theta = constants::PI * 2.0 * i as f32 / n as f32;
            center + (u * theta.cos() + v * theta.sin()) * self.cone_radius
        };
        let line = |start: Vec3, end: Vec3| DebugShape::Line { start, end, color: self.color };

        let mut shapes = Vec::with_capacity(2 + SPOKES + RIM_SEGMENTS);
        shapes.push(line(self.apex, center));
        shapes.extend((0..SPOKES).map(|i| line(self.apex, rim_point(i, SPOKES))));
        shapes.extend(
            (0..RIM_SEGMENTS).map(|i| line(rim_point(i, RIM_SEGMENTS), rim_point(i + 1, RIM_SEGMENTS))),
        );
        shapes.push(DebugShape::Point {
            position: self.aim_point,
            color: self.color,
            size: 6.0,
        });
        shapes
    }
}
