//! Enemy bugs
//!
//! Each bug is locked to one lane for its whole life and crawls right at a
//! constant speed, wrapping back to a mirrored negative start when it
//! passes the far edge.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Sprite};
use super::rng::RandomSource;
use crate::cell_to_pixel;
use crate::consts::*;

/// One of the three stone rows a bug can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane(u8);

impl Lane {
    /// Lane from a grid row, if that row is a stone row
    pub fn from_row(row: i32) -> Option<Self> {
        (FIRST_LANE_ROW..FIRST_LANE_ROW + LANE_COUNT)
            .contains(&row)
            .then(|| Self((row - FIRST_LANE_ROW) as u8))
    }

    pub fn row(&self) -> i32 {
        FIRST_LANE_ROW + self.0 as i32
    }

    /// Pixel y of the lane (63, 146 or 229)
    pub fn y(&self) -> i32 {
        cell_to_pixel(self.row(), 0).y
    }
}

/// A moving hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Horizontal position, continuous between ticks
    pub x: f32,
    pub lane: Lane,
    /// Speed multiplier in [1, 4]
    pub speed: i32,
}

impl Enemy {
    /// Roll a new bug: lane, then start offset, then speed
    pub fn spawn(id: u32, rng: &mut impl RandomSource) -> Self {
        let row = rng.range(FIRST_LANE_ROW, FIRST_LANE_ROW + LANE_COUNT);
        let lane = Lane::from_row(row).unwrap_or(Lane(0));

        // Even offsets start off-screen to the left so arrivals are staggered
        let mut offset = rng.range(1, ENEMY_SPAWN_SPREAD);
        if offset % 2 == 0 {
            offset = -offset;
        }

        let speed = rng.range(1, ENEMY_MAX_SPEED + 1);

        Self {
            id,
            x: offset as f32,
            lane,
            speed,
        }
    }

    pub fn y(&self) -> i32 {
        self.lane.y()
    }

    /// Advance by `dt` seconds. Returns true if the bug wrapped.
    ///
    /// A wrap flips the sign of `x`, so re-entry timing depends on how far
    /// past the edge the bug went.
    pub fn update(&mut self, dt: f32, speed_scale: f32, wrap_x: f32) -> bool {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.x += dt * self.speed as f32 * speed_scale;

        if self.x >= wrap_x {
            self.x = -self.x;
            true
        } else {
            false
        }
    }

    /// True if this bug is on the player's cell: same row, and its left
    /// edge lies within the player's column span
    pub fn hits(&self, player_pos: IVec2) -> bool {
        let px = player_pos.x as f32;
        self.y() == player_pos.y && self.x >= px && self.x <= px + COL_WIDTH as f32
    }
}

impl Entity for Enemy {
    fn sprite(&self) -> Sprite {
        Sprite::EnemyBug
    }

    fn draw_pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, seeded};
    use proptest::prelude::*;

    fn bug(x: f32, row: i32, speed: i32) -> Enemy {
        Enemy {
            id: 1,
            x,
            lane: Lane::from_row(row).unwrap(),
            speed,
        }
    }

    #[test]
    fn test_lane_rows() {
        assert_eq!(Lane::from_row(0), None);
        assert_eq!(Lane::from_row(4), None);
        let ys: Vec<i32> = (1..=3).map(|r| Lane::from_row(r).unwrap().y()).collect();
        assert_eq!(ys, vec![63, 146, 229]);
    }

    #[test]
    fn test_spawn_odd_offset_stays_positive() {
        let mut rng = ScriptedRng::new([2, 417, 3]);
        let e = Enemy::spawn(7, &mut rng);
        assert_eq!(e.id, 7);
        assert_eq!(e.y(), 146);
        assert_eq!(e.x, 417.0);
        assert_eq!(e.speed, 3);
    }

    #[test]
    fn test_spawn_even_offset_is_negated() {
        let mut rng = ScriptedRng::new([3, 500, 1]);
        let e = Enemy::spawn(1, &mut rng);
        assert_eq!(e.y(), 229);
        assert_eq!(e.x, -500.0);
        assert_eq!(e.speed, 1);
    }

    #[test]
    fn test_spawn_bounds() {
        let mut rng = seeded(7);
        for id in 0..500 {
            let e = Enemy::spawn(id, &mut rng);
            assert!([63, 146, 229].contains(&e.y()));
            assert!((1..=4).contains(&e.speed));
            assert!(e.x > -800.0 && e.x < 800.0 && e.x != 0.0);
        }
    }

    #[test]
    fn test_update_wraps_past_threshold() {
        let mut e = bug(785.0, 2, 4);
        let wrapped = e.update(0.05, ENEMY_SPEED_SCALE, ENEMY_WRAP_X);
        assert!(wrapped);
        assert!((e.x + 815.0).abs() < 1e-3);
        assert_eq!(e.y(), 146);
    }

    #[test]
    fn test_wrap_keeps_overshoot() {
        // Same start, different speeds: the faster bug lands further left
        let mut slow = bug(780.0, 1, 1);
        let mut fast = bug(780.0, 1, 4);
        assert!(slow.update(0.1, ENEMY_SPEED_SCALE, ENEMY_WRAP_X));
        assert!(fast.update(0.1, ENEMY_SPEED_SCALE, ENEMY_WRAP_X));
        assert!((slow.x + 795.0).abs() < 1e-3);
        assert!((fast.x + 840.0).abs() < 1e-3);
    }

    #[test]
    fn test_update_near_max_variant() {
        let mut e = bug(770.0, 1, 1);
        assert!(!e.update(0.1, ENEMY_SPEED_SCALE, ENEMY_WRAP_X));
        assert!((e.x - 785.0).abs() < 1e-3);

        let mut e = bug(770.0, 1, 1);
        assert!(e.update(0.1, ENEMY_SPEED_SCALE, 780.0));
        assert!((e.x + 785.0).abs() < 1e-3);
    }

    #[test]
    fn test_update_ignores_bad_dt() {
        let mut e = bug(100.0, 1, 2);
        e.update(-1.0, ENEMY_SPEED_SCALE, ENEMY_WRAP_X);
        assert_eq!(e.x, 100.0);
        e.update(f32::NAN, ENEMY_SPEED_SCALE, ENEMY_WRAP_X);
        assert_eq!(e.x, 100.0);
    }

    #[test]
    fn test_hits() {
        let player = IVec2::new(202, 146);
        assert!(bug(202.0, 2, 1).hits(player));
        assert!(bug(303.0, 2, 1).hits(player));
        assert!(bug(250.5, 2, 1).hits(player));
        assert!(!bug(201.9, 2, 1).hits(player));
        assert!(!bug(303.1, 2, 1).hits(player));
        // Wrong lane
        assert!(!bug(202.0, 1, 1).hits(player));
    }

    proptest! {
        #[test]
        fn prop_row_locked_and_range_bounded(
            seed in any::<u64>(),
            dts in prop::collection::vec(0.0f32..=0.1, 1..400),
        ) {
            // A wrap mirrors at most one frame's travel past the edge
            let max_step = 0.1 * ENEMY_MAX_SPEED as f32 * ENEMY_SPEED_SCALE;
            let min_x = -(ENEMY_WRAP_X + max_step);

            let mut rng = seeded(seed);
            let mut e = Enemy::spawn(0, &mut rng);
            let y = e.y();
            for dt in dts {
                e.update(dt, ENEMY_SPEED_SCALE, ENEMY_WRAP_X);
                prop_assert_eq!(e.y(), y);
                prop_assert!(e.x >= min_x && e.x < ENEMY_WRAP_X, "x = {}", e.x);
            }
        }
    }
}
