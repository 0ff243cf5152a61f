//! Rig descriptions
//!
//! A rig is a list of individual spotlights plus a list of rows, written in
//! TOML or RON and built into a scene in one call:
//!
//! ```toml
//! [[spotlights]]
//! position = [0.0, 6.0, 0.0]
//! target = [0.0, 0.0, 0.0]
//! intensity = 12.0
//!
//! [[layouts]]
//! start_position = [-6.0, 4.0, -3.0]
//! direction = [1.0, 0.0, 0.0]
//! count = 4
//! spacing = 4.0
//! target_offset = [0.0, -4.0, -1.0]
//! color = "#ffe0b0"
//! ```

use crate::config::Config;
use crate::error::RigError;
use crate::foundation::math::Vec3;
use crate::lighting::{create_spotlight, create_spotlights, Color, SpotlightConfig, SpotlightHandle, SpotlightLayout};
use crate::scene::SceneGraph;
use serde::{Deserialize, Serialize};

/// Serializable set of spotlights and layouts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RigDescription {
    /// Individually placed lights
    #[serde(default)]
    pub spotlights: Vec<SpotlightConfig>,
    /// Rows of lights
    #[serde(default)]
    pub layouts: Vec<SpotlightLayout>,
}

impl Config for RigDescription {}

impl RigDescription {
    /// Gallery wall: a key light over the center and a warm row along the back wall
    pub fn gallery() -> Self {
        Self {
            spotlights: vec![SpotlightConfig::new(Vec3::new(0.0, 6.0, 2.0), Vec3::zeros())
                .with_intensity(12.0)
                .with_distance(14.0)],
            layouts: vec![SpotlightLayout {
                start_position: Vec3::new(-6.0, 4.0, -3.0),
                direction: Vec3::x(),
                count: 4,
                spacing: 4.0,
                target_offset: Vec3::new(0.0, -4.0, -1.0),
                color: Some(Color::from_hex(0xffe0b0)),
            }],
        }
    }

    /// Number of lights the rig creates
    pub fn light_count(&self) -> usize {
        self.spotlights.len() + self.layouts.iter().map(|layout| layout.count).sum::<usize>()
    }
}

/// Build every spotlight, then every layout, into `scene`
///
/// Handles are returned in creation order. A degenerate layout stops the
/// build; lights created before it stay attached.
pub fn build_rig<G>(scene: &mut G, rig: &RigDescription) -> Result<Vec<SpotlightHandle>, RigError>
where
    G: SceneGraph + ?Sized,
{
    let mut handles = Vec::with_capacity(rig.light_count());

    for config in &rig.spotlights {
        handles.push(create_spotlight(scene, config));
    }
    for (index, layout) in rig.layouts.iter().enumerate() {
        let row = create_spotlights(scene, layout).map_err(|err| {
            log::warn!("Layout {index} rejected: {err}");
            err
        })?;
        handles.extend(row);
    }

    log::info!(
        "Built rig: {} lights across {} layouts, {} scene nodes",
        handles.len(),
        rig.layouts.len(),
        scene.node_count()
    );
    Ok(handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use crate::scene::Scene;

    #[test]
    fn test_gallery_builds_all_lights() {
        let rig = RigDescription::gallery();
        let mut scene = Scene::new();
        let handles = build_rig(&mut scene, &rig).unwrap();

        assert_eq!(handles.len(), rig.light_count());
        assert_eq!(handles.len(), 5);
        assert_eq!(scene.node_count(), 15);
        assert_eq!(scene.spot_light(handles[0].light).unwrap().intensity, 12.0);
    }

    #[test]
    fn test_round_trip_both_formats() {
        let rig = RigDescription::gallery();
        for format in [ConfigFormat::Toml, ConfigFormat::Ron] {
            let text = rig.to_string_with_format(format).unwrap();
            let parsed = RigDescription::from_str_with_format(&text, format).unwrap();
            assert_eq!(parsed, rig, "{format:?} round trip");
        }
    }

    #[test]
    fn test_parse_documented_toml() {
        let text = r##"
            [[spotlights]]
            position = [0.0, 6.0, 0.0]
            target = [0.0, 0.0, 0.0]
            intensity = 12.0

            [[layouts]]
            start_position = [-6.0, 4.0, -3.0]
            direction = [1.0, 0.0, 0.0]
            count = 4
            spacing = 4.0
            target_offset = [0.0, -4.0, -1.0]
            color = "#ffe0b0"
        "##;
        let rig = RigDescription::from_str_with_format(text, ConfigFormat::Toml).unwrap();

        assert_eq!(rig.spotlights[0].intensity, Some(12.0));
        assert_eq!(rig.spotlights[0].color, None);
        assert_eq!(rig.layouts[0].color, Some(Color::from_hex(0xffe0b0)));
        assert_eq!(rig.light_count(), 5);
    }

    #[test]
    fn test_degenerate_layout_stops_build() {
        let mut rig = RigDescription::gallery();
        rig.layouts[0].direction = Vec3::zeros();

        let mut scene = Scene::new();
        let result = build_rig(&mut scene, &rig);

        assert!(matches!(result, Err(RigError::DegenerateDirection { .. })));
        assert_eq!(scene.node_count(), 3);
    }
}
