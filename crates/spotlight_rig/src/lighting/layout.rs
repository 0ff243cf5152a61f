//! Linear spotlight arrays
//!
//! Places `count` spotlights along a direction at fixed spacing, each aimed
//! at its own position plus a shared offset.

use crate::error::RigError;
use crate::foundation::math::{utils, Vec3};
use crate::lighting::{create_spotlight, Color, SpotlightConfig, SpotlightHandle};
use crate::scene::SceneGraph;
use serde::{Deserialize, Serialize};

/// Inputs for [`create_spotlights`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightLayout {
    /// Position of the first light
    pub start_position: Vec3,
    /// Direction the row extends in; normalized before use
    pub direction: Vec3,
    /// Number of lights
    pub count: usize,
    /// Distance between consecutive lights
    pub spacing: f32,
    /// Added to each light's position to get its aim point
    pub target_offset: Vec3,
    /// Color for every light in the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// Position and aim point of one light in a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Light position
    pub position: Vec3,
    /// Aim point
    pub target: Vec3,
}

impl SpotlightLayout {
    /// Placements for every light, index 0 first
    ///
    /// Position `i` is `start + normalize(direction) * spacing * i`. Fails
    /// with [`RigError::DegenerateDirection`] when the direction is the zero
    /// vector or has a non-finite component, whatever the count.
    #[allow(clippy::cast_precision_loss)]
    pub fn placements(&self) -> Result<Vec<Placement>, RigError> {
        let direction = utils::try_direction(self.direction)
            .ok_or(RigError::DegenerateDirection { direction: self.direction })?;

        Ok((0..self.count)
            .map(|i| {
                let position = self.start_position + direction * (self.spacing * i as f32);
                Placement {
                    position,
                    target: position + self.target_offset,
                }
            })
            .collect())
    }
}

/// Create a row of spotlights and attach them to `scene`
///
/// Each light gets default intensity and distance and the layout's color.
/// Handles come back in creation order. Coincident lights are allowed. The
/// direction is checked before anything is attached, so an error leaves the
/// scene untouched.
pub fn create_spotlights<G>(scene: &mut G, layout: &SpotlightLayout) -> Result<Vec<SpotlightHandle>, RigError>
where
    G: SceneGraph + ?Sized,
{
    let placements = layout.placements()?;

    let handles = placements
        .iter()
        .map(|placement| {
            log::debug!("Layout light position {:?}", placement.position.as_slice());
            let config = SpotlightConfig::new(placement.position, placement.target).with_color(layout.color);
            create_spotlight(scene, &config)
        })
        .collect();

    Ok(handles)
}
