//! Sprite identifiers and the shared entity shape
//!
//! Entities don't share a base type. Each one carries its own position and
//! exposes it through [`Entity`], which is all the renderer needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Every image the game asks the renderer to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    EnemyBug,
    Rock,
    Star,
    CharBoy,
    CharCatGirl,
    CharHornGirl,
    CharPinkGirl,
    CharPrincessGirl,
}

impl Sprite {
    /// The five player skins, in roll order
    pub const SKINS: [Sprite; 5] = [
        Sprite::CharBoy,
        Sprite::CharCatGirl,
        Sprite::CharHornGirl,
        Sprite::CharPinkGirl,
        Sprite::CharPrincessGirl,
    ];

    /// Asset path handed to the image loader
    pub fn asset_path(&self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::Rock => "images/Rock.png",
            Sprite::Star => "images/Star.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::CharCatGirl => "images/char-cat-girl.png",
            Sprite::CharHornGirl => "images/char-horn-girl.png",
            Sprite::CharPinkGirl => "images/char-pink-girl.png",
            Sprite::CharPrincessGirl => "images/char-princess-girl.png",
        }
    }

    pub fn is_skin(&self) -> bool {
        Self::SKINS.contains(self)
    }
}

/// Anything with a position and a sprite
pub trait Entity {
    fn sprite(&self) -> Sprite;

    /// Top-left draw position in pixels
    fn draw_pos(&self) -> Vec2;
}
