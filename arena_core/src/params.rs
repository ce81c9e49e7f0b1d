/// Game tuning parameters for the paddle arena
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Build
    pub const VERSION: &'static str = "Dev Build";
    pub const DEFAULT_MAP: &'static str = "BigMap";

    // Paddle
    pub const MAX_HEALTH: u32 = 3;
    pub const MOVE_SPEED: f32 = 600.0; // units per second

    // Camera
    pub const CAMERA_SMOOTHING: f32 = 0.05; // Zoom lerp fraction per tick
    pub const CAMERA_MARGIN_FRACTION: f32 = 2.0 / 3.0; // Of each viewport dimension
    pub const CAMERA_MIN_ZOOM: f32 = 1.0; // Never closer than 1:1
}
