//! Star counter: one star per goal reach, all lost on a collision

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Sprite;
use crate::consts::COL_WIDTH;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarCounter {
    pub count: u32,
}

impl StarCounter {
    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Draw positions of the star icons, left to right along the top edge
    pub fn icon_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.count).map(|i| Vec2::new((i as i32 * COL_WIDTH) as f32, 0.0))
    }

    pub fn sprite(&self) -> Sprite {
        Sprite::Star
    }
}
