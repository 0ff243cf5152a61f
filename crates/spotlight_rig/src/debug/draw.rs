//! Debug drawing primitives
//!
//! Helpers describe themselves as simple line and point primitives that any
//! renderer can draw as an overlay. Shapes here are persistent: they live as
//! long as the helper that produced them.

use crate::foundation::math::{Vec3, Vec4};

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec3,
        /// Segment end
        end: Vec3,
        /// RGBA color
        color: Vec4,
    },

    /// Point at position
    Point {
        /// Point location
        position: Vec3,
        /// RGBA color
        color: Vec4,
        /// Size in pixels
        size: f32,
    },
}

impl DebugShape {
    /// Length of a line, zero for a point
    pub fn length(&self) -> f32 {
        match self {
            Self::Line { start, end, .. } => (end - start).norm(),
            Self::Point { .. } => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = DebugShape::Line {
            start: Vec3::zeros(),
            end: Vec3::new(3.0, 4.0, 0.0),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        };
        assert_eq!(line.length(), 5.0);

        let point = DebugShape::Point {
            position: Vec3::zeros(),
            color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            size: 4.0,
        };
        assert_eq!(point.length(), 0.0);
    }
}
