//! Per-frame simulation step
//!
//! One call to [`tick`] is one frame of the game loop: queued inputs, then
//! every enemy (with its collision check), then the goal check. Rendering
//! happens after the call returns.

use super::player::Direction;
use super::rng::RandomSource;
use super::state::GameState;

/// Input collected since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional key presses, in arrival order
    pub moves: Vec<Direction>,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    pub fn clear(&mut self) {
        self.moves.clear();
        self.pause = false;
    }
}

/// Advance the game by `dt` seconds
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    if input.pause {
        state.toggle_pause();
    }

    if state.is_paused() {
        return;
    }

    // Each key press is applied fully before the next one
    for &direction in &input.moves {
        state.handle_input(direction);
    }

    state.time_ticks += 1;

    // All enemy updates (and any collision resets) land before the goal check
    state.update_enemies(dt);
    state.update_player();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::enemy::Lane;
    use crate::sim::rng::ScriptedRng;
    use crate::sim::state::{GameEvent, GamePhase};
    use glam::IVec2;

    fn quiet_state() -> GameState<ScriptedRng> {
        // One enemy parked far off-screen in lane 1, fixed skin, rock at (0, 63)
        let settings = Settings {
            enemy_count: 1,
            random_skins: false,
            ..Settings::default()
        };
        let mut state = GameState::with_rng(settings, ScriptedRng::new([1, 799, 1, 0, 0]));
        state.enemies[0].x = -799.0;
        state
    }

    fn moves(dirs: &[Direction]) -> TickInput {
        TickInput {
            moves: dirs.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn test_three_ups_from_start() {
        let mut state = quiet_state();
        assert_eq!(state.rock.pos, IVec2::new(0, 63));

        tick(&mut state, &moves(&[Direction::Up; 3]), 0.0);
        assert_eq!(state.player.pos, IVec2::new(202, 146));
        assert_eq!(state.stars.count, 0);
    }

    #[test]
    fn test_crossing_scores_on_next_update() {
        let mut state = quiet_state();
        tick(&mut state, &moves(&[Direction::Up; 4]), 0.0);
        assert_eq!(state.player.pos, IVec2::new(202, 63));

        // Entering the goal row resolves in the same frame's player update
        tick(&mut state, &moves(&[Direction::Up]), 0.0);
        assert_eq!(state.player.pos, IVec2::new(202, 395));
        assert_eq!(state.stars.count, 1);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.stars.count, 1);
    }

    #[test]
    fn test_rock_blocks_crossing() {
        let mut state = quiet_state();
        state.rock.pos = IVec2::new(202, 229);
        tick(&mut state, &moves(&[Direction::Up; 3]), 0.0);
        assert_eq!(state.player.pos, IVec2::new(202, 312));
        let blocked = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::MoveBlocked { .. }))
            .count();
        assert_eq!(blocked, 2);
    }

    #[test]
    fn test_collision_wipes_stars() {
        let mut state = quiet_state();
        state.stars.count = 7;
        state.stats.best_stars = 7;
        state.player.pos = IVec2::new(303, 229);
        state.enemies[0].lane = Lane::from_row(3).unwrap();
        state.enemies[0].speed = 4;
        state.enemies[0].x = 280.0;

        // 280 + 0.05 * 4 * 150 = 310
        tick(&mut state, &TickInput::default(), 0.05);

        assert_eq!(state.stars.count, 0);
        assert_eq!(state.player.pos, IVec2::new(202, 395));
        assert_eq!(state.stats.best_stars, 7);
    }

    #[test]
    fn test_enemy_wrap_scenario() {
        let mut state = quiet_state();
        state.enemies[0].lane = Lane::from_row(2).unwrap();
        state.enemies[0].speed = 4;
        state.enemies[0].x = 785.0;

        tick(&mut state, &TickInput::default(), 0.05);

        assert!((state.enemies[0].x + 815.0).abs() < 1e-3);
        assert_eq!(state.enemies[0].y(), 146);
        assert!(state.drain_events().contains(&GameEvent::EnemyWrapped { enemy: 0 }));
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut state = quiet_state();
        let x0 = state.enemies[0].x;
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        tick(&mut state, &pause, 0.1);
        assert_eq!(state.phase, GamePhase::Paused);

        tick(&mut state, &moves(&[Direction::Up]), 0.1);
        assert_eq!(state.enemies[0].x, x0);
        assert_eq!(state.player.pos, IVec2::new(202, 395));
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause, 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut state1 = GameState::new(99999, settings.clone());
        let mut state2 = GameState::new(99999, settings);

        let inputs = [
            moves(&[Direction::Up]),
            TickInput::default(),
            moves(&[Direction::Left, Direction::Up]),
            TickInput::default(),
            moves(&[Direction::Up, Direction::Up, Direction::Right]),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, 1.0 / 60.0);
                tick(&mut state2, input, 1.0 / 60.0);
            }
        }

        assert_eq!(state1.snapshot(), state2.snapshot());
        assert_eq!(state1.time_ticks, 250);
    }
}
