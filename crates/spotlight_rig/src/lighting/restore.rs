//! Helper refresh and snapshot restoration
//!
//! Nothing in the crate moves lights after creation, but callers do
//! (animation, editors). These bring the helper back in line and undo drift.

use crate::debug::SpotLightHelper;
use crate::error::RigError;
use crate::lighting::SpotlightHandle;
use crate::scene::SceneGraph;

/// Rebuild the debug helper from the light's current state
///
/// Uses the light's current target node, which may differ from
/// `handle.target` if the caller re-aimed the light.
pub fn refresh_helper<G>(scene: &mut G, handle: &SpotlightHandle) -> Result<(), RigError>
where
    G: SceneGraph + ?Sized,
{
    let light = scene.spot_light(handle.light)?;
    let aim_point = scene.aim_target(light.target)?.position;
    let refreshed = SpotLightHelper::from_light(light, aim_point);

    *scene.helper_mut(handle.helper)? = refreshed;
    Ok(())
}

/// Move the light and its target back to their creation-time positions
///
/// Snapshots are read, never written. Light, target and helper are all
/// resolved before anything moves, so a stale handle leaves the scene as it
/// was. The helper is refreshed afterwards.
pub fn restore_original<G>(scene: &mut G, handle: &SpotlightHandle) -> Result<(), RigError>
where
    G: SceneGraph + ?Sized,
{
    let light = scene.spot_light(handle.light)?;
    let (target_id, original_position) = (light.target, light.original_position);
    let original_target = scene.aim_target(target_id)?.original_target;
    scene.helper(handle.helper)?;

    scene.spot_light_mut(handle.light)?.position = original_position;
    scene.aim_target_mut(target_id)?.position = original_target;

    log::debug!("Restored spotlight {:?} to its original placement", handle.light);
    refresh_helper(scene, handle)
}
