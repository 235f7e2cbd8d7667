//! The player character
//!
//! The player always sits on a grid cell. Moves are single-axis steps of
//! one cell, refused at the board edge or when the rock is in the way.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};
use super::rng::RandomSource;
use super::rock::Rock;
use crate::cell_to_pixel;
use crate::consts::*;

/// A single grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Pixel offset of one step in this direction
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-COL_WIDTH, 0),
            Direction::Right => IVec2::new(COL_WIDTH, 0),
            Direction::Up => IVec2::new(0, -ROW_HEIGHT),
            Direction::Down => IVec2::new(0, ROW_HEIGHT),
        }
    }
}

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    /// Would leave the board
    Edge,
    /// The rock is on the destination cell
    Rock,
    /// Already on the goal row, waiting for the next update
    Goal,
}

/// Result of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: IVec2, to: IVec2 },
    Blocked(BlockReason),
}

/// Whether the player is still crossing or has just reached the water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPhase {
    Traversing,
    /// On the goal row; resolved (scored and reset) by the next update
    Reached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub skin: Sprite,
}

impl Player {
    pub fn start_pos() -> IVec2 {
        cell_to_pixel(PLAYER_START_ROW, PLAYER_START_COL)
    }

    pub fn new(rng: &mut impl RandomSource, random_skins: bool) -> Self {
        let mut player = Self {
            pos: Self::start_pos(),
            skin: Sprite::CharBoy,
        };
        player.reset(rng, random_skins);
        player
    }

    /// Back to the start cell, optionally with a fresh skin
    pub fn reset(&mut self, rng: &mut impl RandomSource, random_skins: bool) {
        self.pos = Self::start_pos();
        self.skin = if random_skins {
            let idx = rng.range(0, Sprite::SKINS.len() as i32);
            Sprite::SKINS[idx as usize]
        } else {
            Sprite::CharBoy
        };
    }

    pub fn phase(&self) -> PlayerPhase {
        if self.pos.y == GOAL_Y {
            PlayerPhase::Reached
        } else {
            PlayerPhase::Traversing
        }
    }

    pub fn reached_goal(&self) -> bool {
        self.phase() == PlayerPhase::Reached
    }

    /// Check a move without applying it
    pub fn check_move(&self, direction: Direction, rock: &Rock) -> Result<IVec2, BlockReason> {
        let at_edge = match direction {
            Direction::Left => self.pos.x == 0,
            Direction::Right => self.pos.x == RIGHT_X,
            Direction::Down => self.pos.y == BOTTOM_Y,
            Direction::Up => return self.check_up(rock),
        };
        if at_edge {
            return Err(BlockReason::Edge);
        }
        self.check_rock(direction, rock)
    }

    fn check_up(&self, rock: &Rock) -> Result<IVec2, BlockReason> {
        if self.reached_goal() {
            return Err(BlockReason::Goal);
        }
        self.check_rock(Direction::Up, rock)
    }

    fn check_rock(&self, direction: Direction, rock: &Rock) -> Result<IVec2, BlockReason> {
        let to = self.pos + direction.delta();
        if rock.occupies(to) {
            Err(BlockReason::Rock)
        } else {
            Ok(to)
        }
    }

    /// Attempt one step. At most one axis changes by one cell.
    pub fn try_move(&mut self, direction: Direction, rock: &Rock) -> MoveOutcome {
        match self.check_move(direction, rock) {
            Ok(to) => {
                let from = self.pos;
                self.pos = to;
                MoveOutcome::Moved { from, to }
            }
            Err(reason) => MoveOutcome::Blocked(reason),
        }
    }
}

impl Entity for Player {
    fn sprite(&self) -> Sprite {
        self.skin
    }

    fn draw_pos(&self) -> Vec2 {
        self.pos.as_vec2()
    }
}
