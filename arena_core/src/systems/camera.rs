use hecs::World;
use log::debug;

use crate::{CameraState, Config, Tracked, Transform2D, Viewport};

/// Frame every tracked entity and ease the camera toward it
pub fn update_camera(
    world: &World,
    viewport: &Viewport,
    config: &Config,
    camera: &mut CameraState,
) {
    // Deterministic order: sort by entity ID
    let mut tracked: Vec<_> = world
        .query::<(&Transform2D, &Tracked)>()
        .iter()
        .map(|(e, (transform, _))| (e, transform.pos))
        .collect();
    tracked.sort_by_key(|(e, _)| e.id());

    let count = tracked.len();
    let frame = camera.move_and_zoom(tracked.into_iter().map(|(_, pos)| pos), viewport, config);

    debug!(
        "camera: framed {} actors, target zoom {:.3}, zoom {:.3} at {}",
        count, frame.zoom.x, camera.zoom.x, camera.position
    );
}
