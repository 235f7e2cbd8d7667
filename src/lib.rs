//! Bug Crossing - a grid-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `render`: Draw-order contract with the sprite renderer
//! - `input`: Key decoding into grid moves
//! - `settings`: JSON configuration

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Grid dimensions
    pub const COL_WIDTH: i32 = 101;
    pub const ROW_HEIGHT: i32 = 83;
    pub const NUM_COLS: i32 = 5;
    pub const NUM_ROWS: i32 = 6;
    /// Entities are drawn this far above their row line
    pub const Y_OFFSET: i32 = 20;

    /// Goal row (water) y coordinate - reaching it scores a star
    pub const GOAL_Y: i32 = -Y_OFFSET;
    /// Bottom row y coordinate (395)
    pub const BOTTOM_Y: i32 = (NUM_ROWS - 1) * ROW_HEIGHT - Y_OFFSET;
    /// Rightmost column x coordinate (404)
    pub const RIGHT_X: i32 = (NUM_COLS - 1) * COL_WIDTH;

    /// Player start cell (row, col) - 6th row, 3rd column
    pub const PLAYER_START_ROW: i32 = 5;
    pub const PLAYER_START_COL: i32 = 2;

    /// Enemy lanes are rows 1..=3 (the stone rows)
    pub const FIRST_LANE_ROW: i32 = 1;
    pub const LANE_COUNT: i32 = 3;

    /// Enemy horizontal travel range
    pub const ENEMY_MIN_X: f32 = -800.0;
    pub const ENEMY_WRAP_X: f32 = 790.0;
    /// Spawn magnitudes are drawn from [1, ENEMY_SPAWN_SPREAD)
    pub const ENEMY_SPAWN_SPREAD: i32 = 800;
    /// Speed multipliers are drawn from [1, ENEMY_MAX_SPEED]
    pub const ENEMY_MAX_SPEED: i32 = 4;
    /// Pixels per second per unit of speed
    pub const ENEMY_SPEED_SCALE: f32 = 150.0;
    pub const ENEMY_COUNT: usize = 5;
}

/// Pixel position of a grid cell (row 0 is the goal row)
#[inline]
pub fn cell_to_pixel(row: i32, col: i32) -> IVec2 {
    use consts::*;
    IVec2::new(col * COL_WIDTH, row * ROW_HEIGHT - Y_OFFSET)
}

/// Grid cell (row, col) of a snapped pixel position, if it is one
#[inline]
pub fn pixel_to_cell(pos: IVec2) -> Option<(i32, i32)> {
    use consts::*;
    let y = pos.y + Y_OFFSET;
    if pos.x % COL_WIDTH != 0 || y % ROW_HEIGHT != 0 {
        return None;
    }
    let (row, col) = (y / ROW_HEIGHT, pos.x / COL_WIDTH);
    ((0..NUM_ROWS).contains(&row) && (0..NUM_COLS).contains(&col)).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use consts::*;

    #[test]
    fn test_cell_to_pixel() {
        assert_eq!(cell_to_pixel(0, 0), IVec2::new(0, -20));
        assert_eq!(cell_to_pixel(5, 2), IVec2::new(202, 395));
        assert_eq!(cell_to_pixel(3, 4), IVec2::new(404, 229));
        assert_eq!(BOTTOM_Y, 395);
        assert_eq!(RIGHT_X, 404);
    }

    #[test]
    fn test_pixel_to_cell() {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                assert_eq!(pixel_to_cell(cell_to_pixel(row, col)), Some((row, col)));
            }
        }
        assert_eq!(pixel_to_cell(IVec2::new(50, 63)), None);
        assert_eq!(pixel_to_cell(IVec2::new(505, 63)), None);
        assert_eq!(pixel_to_cell(IVec2::new(0, -103)), None);
    }
}
