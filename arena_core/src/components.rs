use glam::Vec2;

/// World-space position of an entity
#[derive(Debug, Clone, Copy, Default)]
pub struct Transform2D {
    pub pos: Vec2,
}

impl Transform2D {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8,
}

impl Paddle {
    pub fn new(player_id: u8) -> Self {
        Self { player_id }
    }
}

/// Marker for entities the camera keeps in frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracked;
