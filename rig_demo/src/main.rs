//! Spotlight rig demo
//!
//! Builds a rig into an empty scene and logs every light. Pass a `.toml` or
//! `.ron` rig file as the only argument; without one the gallery rig is used.
//!
//! ```text
//! RUST_LOG=debug cargo run -p rig_demo -- rig_demo/rigs/stage.toml
//! ```

use spotlight_rig::debug::{collect_helper_shapes, DebugShape};
use spotlight_rig::foundation::logging;
use spotlight_rig::foundation::math::utils::rad_to_deg;
use spotlight_rig::prelude::*;

fn load_rig() -> Result<RigDescription, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading rig from {path}");
            RigDescription::load_from_file(path)
        }
        None => {
            log::info!("No rig file given, using the gallery rig");
            Ok(RigDescription::gallery())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    let rig = load_rig()?;
    let mut scene = Scene::new();
    let handles = build_rig(&mut scene, &rig)?;

    for (index, handle) in handles.iter().enumerate() {
        let light = scene.spot_light(handle.light)?;
        let target = scene.aim_target(light.target)?;
        log::info!(
            "#{index:<2} {} at {:?} -> {:?}, intensity {}, distance {}, cone {:.0} deg",
            light.color,
            light.position.as_slice(),
            target.position.as_slice(),
            light.intensity,
            light.distance,
            rad_to_deg(light.angle)
        );
    }

    let shapes = collect_helper_shapes(&scene);
    let outline_length: f32 = shapes.iter().map(DebugShape::length).sum();
    log::info!(
        "{} lights, {} scene nodes, {} debug shapes ({outline_length:.1} units of outline)",
        handles.len(),
        scene.node_count(),
        shapes.len()
    );
    Ok(())
}
