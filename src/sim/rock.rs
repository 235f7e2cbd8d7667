//! The rock: a static blocker on one of the stone cells

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};
use super::rng::RandomSource;
use crate::cell_to_pixel;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rock {
    pub pos: IVec2,
}

impl Rock {
    /// Create a rock already placed on a random cell
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let mut rock = Self { pos: IVec2::ZERO };
        rock.reset(rng);
        rock
    }

    pub fn at(pos: IVec2) -> Self {
        Self { pos }
    }

    /// Move to a random stone cell: column first, then lane
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        let col = rng.range(0, NUM_COLS);
        let lane = rng.range(0, LANE_COUNT);
        self.pos = cell_to_pixel(FIRST_LANE_ROW + lane, col);
        log::debug!("Rock moved to ({}, {})", self.pos.x, self.pos.y);
    }

    pub fn occupies(&self, pos: IVec2) -> bool {
        self.pos == pos
    }
}

impl Entity for Rock {
    fn sprite(&self) -> Sprite {
        Sprite::Rock
    }

    fn draw_pos(&self) -> Vec2 {
        self.pos.as_vec2()
    }
}
