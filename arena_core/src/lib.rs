pub mod bounds;
pub mod camera;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use bounds::*;
pub use camera::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of camera work against the host's world.
///
/// Call once per simulation tick, after actors have moved.
pub fn step(world: &World, viewport: &Viewport, config: &Config, camera: &mut CameraState) {
    update_camera(world, viewport, config, camera);
}

/// Helper to create a tracked paddle entity
pub fn spawn_paddle(world: &mut World, player_id: u8, pos: Vec2) -> hecs::Entity {
    world.spawn((Paddle::new(player_id), Transform2D::new(pos), Tracked))
}
