//! Math utilities and types
//!
//! Thin aliases over `nalgebra` so the rest of the crate speaks in `Vec3`.

pub use nalgebra::{Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (RGBA colors for debug shapes)
pub type Vec4 = Vector4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Normalize a direction, rejecting the zero vector and non-finite input.
    ///
    /// The vector is divided by its largest absolute component first, so
    /// `norm_squared` neither overflows for huge components nor underflows
    /// for tiny ones.
    pub fn try_direction(v: Vec3) -> Option<Vec3> {
        if !v.iter().all(|c| c.is_finite()) {
            return None;
        }
        let largest = v.amax();
        if largest == 0.0 {
            return None;
        }
        Some((v / largest).normalize())
    }

    /// Any unit vector perpendicular to `axis` (which must be unit length)
    pub fn any_perpendicular(axis: Vec3) -> Vec3 {
        let reference = if axis.y.abs() < 0.99 { Vec3::y() } else { Vec3::x() };
        axis.cross(&reference).normalize()
    }
}
