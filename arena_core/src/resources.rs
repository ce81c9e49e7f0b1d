use glam::Vec2;
use log::info;

use crate::params::Params;

/// Viewport size in pixels, queried from the host window each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 600.0,
        }
    }
}

/// Per-run session state shared with whichever systems need it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub is_playing: bool,
    pub map: String,
    pub user_name: String,
    pub user_id: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_playing: false,
            map: Params::DEFAULT_MAP.to_string(),
            user_name: String::new(),
            user_id: 0,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build label shown to players
    pub fn version(&self) -> &'static str {
        Params::VERSION
    }

    pub fn sign_in(&mut self, user_name: impl Into<String>, user_id: u32) {
        self.user_name = user_name.into();
        self.user_id = user_id;
        info!("session: signed in as {} ({})", self.user_name, self.user_id);
    }

    /// Begin playing on `map`
    pub fn start(&mut self, map: impl Into<String>) {
        self.map = map.into();
        self.is_playing = true;
        info!("session: started on map {}", self.map);
    }

    /// Stop playing; user and map are kept for the next round
    pub fn end(&mut self) {
        self.is_playing = false;
        info!("session: ended on map {}", self.map);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        info!("session: reset");
    }
}
