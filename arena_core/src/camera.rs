//! Auto-framing camera
//!
//! Centres on the mean position of the tracked actors and eases the zoom
//! toward the level that fits all of them plus a margin. A zoom of 1.0 shows
//! exactly one viewport of world; larger values show more.

use glam::{Mat4, Vec2, Vec3};
use log::info;

use crate::bounds::Aabb;
use crate::config::Config;
use crate::resources::Viewport;

/// Target produced by [`compute_frame`] for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Mean actor position, or `None` when there was nothing to frame
    pub position: Option<Vec2>,
    /// Isotropic target zoom, never below `Config::min_zoom`
    pub zoom: Vec2,
}

/// Compute where the camera should look and how far out it should zoom.
///
/// The spread on each axis is twice the larger one-sided deviation from the
/// mean, so the mean stays centred even when actors bunch up on one side.
/// `viewport` must have positive dimensions.
pub fn compute_frame<I>(actors: I, viewport: &Viewport, config: &Config) -> Frame
where
    I: IntoIterator<Item = Vec2>,
{
    debug_assert!(
        viewport.width > 0.0 && viewport.height > 0.0,
        "viewport must have positive dimensions"
    );

    let floor = Vec2::splat(config.min_zoom);

    let mut count = 0usize;
    let mut sum = Vec2::ZERO;
    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    for pos in actors {
        count += 1;
        sum += pos;
        min = min.min(pos);
        max = max.max(pos);
    }

    if count == 0 {
        return Frame {
            position: None,
            zoom: floor,
        };
    }

    let average = sum / count as f32;
    let spread = 2.0 * (max - average).max(average - min);

    let size = viewport.size();
    let margin = size * config.margin_fraction;
    let fit = (spread + margin) / size;

    // Same zoom on both axes, large enough for whichever axis needs more
    let largest = fit.max_element();
    let zoom = if largest < config.min_zoom {
        floor
    } else {
        Vec2::splat(largest)
    };

    Frame {
        position: Some(average),
        zoom,
    }
}

/// [`compute_frame`] with the default framing parameters
pub fn compute_frame_default<I>(actors: I, viewport: &Viewport) -> Frame
where
    I: IntoIterator<Item = Vec2>,
{
    compute_frame(actors, viewport, &Config::default())
}

/// Persistent camera state, owned by the host between ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec2,
    pub zoom: Vec2,
    pub spawn: Vec2,
}

impl CameraState {
    /// Camera at `spawn` with 1:1 zoom
    pub fn new(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            zoom: Vec2::ONE,
            spawn,
        }
    }

    /// Apply one frame target.
    ///
    /// Position snaps; zoom moves `smoothing` of the way to the target. The
    /// fraction is per call, so easing speed follows the tick rate.
    pub fn tick(&mut self, frame: &Frame, smoothing: f32) {
        if let Some(position) = frame.position {
            self.position = position;
        }
        self.zoom = self.zoom.lerp(frame.zoom, smoothing);
    }

    /// Frame `actors` and ease toward the result in one call
    pub fn move_and_zoom<I>(&mut self, actors: I, viewport: &Viewport, config: &Config) -> Frame
    where
        I: IntoIterator<Item = Vec2>,
    {
        let frame = compute_frame(actors, viewport, config);
        self.tick(&frame, config.smoothing);
        frame
    }

    /// Move to a new spawn point and remember it. Zoom is untouched.
    pub fn reset(&mut self, new_spawn: Vec2) {
        self.spawn = new_spawn;
        self.position = new_spawn;
        info!("camera: reset to spawn {new_spawn}");
    }

    /// Return to the remembered spawn point. Zoom is untouched.
    pub fn reset_to_spawn(&mut self) {
        self.position = self.spawn;
        info!("camera: returned to spawn {}", self.spawn);
    }

    /// World-space rectangle currently on screen
    pub fn visible_rect(&self, viewport: &Viewport) -> Aabb {
        Aabb::from_center_size(self.position, viewport.size() * self.zoom)
    }

    /// Orthographic view-projection covering [`Self::visible_rect`]
    pub fn view_proj(&self, viewport: &Viewport) -> Mat4 {
        let eye = Vec3::new(self.position.x, self.position.y, 10.0);
        let target = Vec3::new(self.position.x, self.position.y, 0.0);
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);

        let half = viewport.size() * self.zoom * 0.5;
        let projection = Mat4::orthographic_rh(-half.x, half.x, -half.y, half.y, 0.1, 100.0);

        projection * view
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}
