use arena_core::*;
use glam::Vec2;
use hecs::World;

fn setup() -> (World, Viewport, Config, CameraState, Session) {
    let world = World::new();
    let viewport = Viewport::new(900.0, 900.0);
    let config = Config::new();
    let camera = CameraState::new(Vec2::new(0.0, 0.0));
    let session = Session::new();
    (world, viewport, config, camera, session)
}

#[test]
fn test_round_zooms_out_as_paddles_separate() {
    let (mut world, viewport, config, mut camera, mut session) = setup();
    session.start(Params::DEFAULT_MAP);

    let left = spawn_paddle(&mut world, 0, Vec2::new(-100.0, 0.0));
    let right = spawn_paddle(&mut world, 1, Vec2::new(100.0, 0.0));

    // Paddles drift apart at move speed for one second
    let dt = 1.0 / 60.0;
    for _ in 0..60 {
        for (entity, transform) in world.query_mut::<&mut Transform2D>() {
            let dir = if entity == left { -1.0 } else { 1.0 };
            transform.pos.x += dir * config.move_speed * dt;
        }
        step(&world, &viewport, &config, &mut camera);
    }

    let left_pos = world.get::<&Transform2D>(left).unwrap().pos;
    let right_pos = world.get::<&Transform2D>(right).unwrap().pos;
    assert!((camera.position - (left_pos + right_pos) / 2.0).length() < 0.01);
    assert!(camera.zoom.x > 1.0, "Camera should have zoomed out");
    assert_eq!(camera.zoom.x, camera.zoom.y, "Zoom stays isotropic");

    // Hold still until the zoom settles on the fitted level
    for _ in 0..600 {
        step(&world, &viewport, &config, &mut camera);
    }
    let spread = right_pos.x - left_pos.x;
    let fitted = (spread + viewport.width * 2.0 / 3.0) / viewport.width;
    assert!(
        (camera.zoom.x - fitted).abs() < 0.001,
        "Zoom {} should settle at {}",
        camera.zoom.x,
        fitted
    );
    let rect = camera.visible_rect(&viewport);
    assert!(rect.contains(left_pos) && rect.contains(right_pos));
}

#[test]
fn test_round_transition_resets_camera() {
    let (mut world, viewport, config, mut camera, mut session) = setup();
    let spawn = Vec2::new(250.0, -75.0);
    camera.reset(spawn);
    session.start("BigMap");

    let paddle = spawn_paddle(&mut world, 0, Vec2::new(-300.0, 300.0));
    for _ in 0..10 {
        step(&world, &viewport, &config, &mut camera);
    }
    assert_eq!(camera.position, Vec2::new(-300.0, 300.0));

    // Round over: paddle removed, camera sent back to spawn
    world.despawn(paddle).unwrap();
    session.end();
    camera.reset_to_spawn();

    step(&world, &viewport, &config, &mut camera);
    assert_eq!(camera.position, spawn, "Empty world must not move the camera");
    assert!(!session.is_playing);
}

#[test]
fn test_empty_world_relaxes_zoom_to_one() {
    let (world, viewport, config, mut camera, _session) = setup();
    camera.zoom = Vec2::splat(3.0);

    for _ in 0..200 {
        step(&world, &viewport, &config, &mut camera);
    }

    assert!((camera.zoom.x - 1.0).abs() < 0.001, "Zoom {}", camera.zoom.x);
    assert!(camera.zoom.x >= 1.0, "Easing never overshoots");
    assert_eq!(camera.position, Vec2::ZERO);
}

#[test]
fn test_faster_smoothing_converges_sooner() {
    let (mut world, viewport, _config, _camera, _session) = setup();
    spawn_paddle(&mut world, 0, Vec2::new(-2000.0, 0.0));
    spawn_paddle(&mut world, 1, Vec2::new(2000.0, 0.0));

    let slow = Config::new();
    let fast = Config::new().with_smoothing(0.25);
    let mut slow_camera = CameraState::default();
    let mut fast_camera = CameraState::default();

    for _ in 0..10 {
        step(&world, &viewport, &slow, &mut slow_camera);
        step(&world, &viewport, &fast, &mut fast_camera);
    }

    assert!(fast_camera.zoom.x > slow_camera.zoom.x);
}
