//! Paddle entity

use multiball_math::Vec2;

/// A paddle owned by a player
///
/// Paddles are registered in the store and drawn with the same quad as
/// balls, but nothing updates them yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paddle {
    /// Position in world coordinates
    pub pos: Vec2,
    /// Id of the player controlling this paddle
    pub player_id: u32,
}

impl Paddle {
    /// Create a paddle at the given position for the given player
    pub fn new(pos: Vec2, player_id: u32) -> Self {
        Self { pos, player_id }
    }
}
