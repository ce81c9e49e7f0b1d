use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub smoothing: f32,
    pub margin_fraction: f32,
    pub min_zoom: f32,
    pub max_health: u32,
    pub move_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smoothing: Params::CAMERA_SMOOTHING,
            margin_fraction: Params::CAMERA_MARGIN_FRACTION,
            min_zoom: Params::CAMERA_MIN_ZOOM,
            max_health: Params::MAX_HEALTH,
            move_speed: Params::MOVE_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-tick zoom smoothing fraction (clamped to `0..=1`)
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing.clamp(0.0, 1.0);
        self
    }

    /// Override the framing margin, as a fraction of each viewport dimension
    pub fn with_margin_fraction(mut self, margin_fraction: f32) -> Self {
        self.margin_fraction = margin_fraction.max(0.0);
        self
    }

    /// Override the closest zoom the camera may reach
    pub fn with_min_zoom(mut self, min_zoom: f32) -> Self {
        self.min_zoom = min_zoom;
        self
    }
}
