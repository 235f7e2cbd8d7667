//! Game state and the reset protocols
//!
//! `GameState` owns every entity. Enemy updates, moves, collisions and goal
//! reaches all go through it, so the reset rules live in one place.

use glam::IVec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::{BlockReason, Direction, MoveOutcome, Player};
use super::rng::{RandomSource, seeded};
use super::rock::Rock;
use super::stars::StarCounter;
use crate::settings::Settings;

/// Whether the simulation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Paused,
}

/// Something that happened during a frame, for the front end to report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved { from: IVec2, to: IVec2 },
    MoveBlocked { direction: Direction, reason: BlockReason },
    /// A bug caught the player; all stars are lost
    Collision { enemy: u32, stars_lost: u32 },
    /// The player reached the water; `stars` is the new total
    GoalReached { stars: u32 },
    EnemyWrapped { enemy: u32 },
    Paused,
    Resumed,
}

/// Per-session counters (never persisted)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub goals: u32,
    pub collisions: u32,
    /// Highest star count held at once
    pub best_stars: u32,
}

/// Serializable view of the game, for replays and debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub rock: Rock,
    pub enemies: Vec<Enemy>,
    pub stars: StarCounter,
    pub stats: SessionStats,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Seed the RNG was created from (0 for injected sources)
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub rock: Rock,
    pub stars: StarCounter,
    pub stats: SessionStats,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    rng: R,
}

impl GameState<Pcg32> {
    /// Create a new game seeded with `seed`
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = Self::with_rng(settings, seeded(seed));
        state.seed = seed;
        log::info!("New game: seed={} enemies={}", seed, state.enemies.len());
        state
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game drawing all randomness from `rng`
    ///
    /// Enemies are rolled first (in id order), then the player skin, then
    /// the rock cell.
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        let enemies = (0..settings.enemy_count as u32)
            .map(|id| Enemy::spawn(id, &mut rng))
            .collect();
        let player = Player::new(&mut rng, settings.random_skins);
        let rock = Rock::new(&mut rng);

        Self {
            seed: 0,
            settings,
            phase: GamePhase::Playing,
            time_ticks: 0,
            enemies,
            player,
            rock,
            stars: StarCounter::default(),
            stats: SessionStats::default(),
            events: Vec::new(),
            rng,
        }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Toggle between playing and paused
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Paused;
                self.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Resumed);
            }
        }
    }

    /// Apply one directional input. Ignored while paused.
    pub fn handle_input(&mut self, direction: Direction) -> Option<MoveOutcome> {
        if self.is_paused() {
            return None;
        }

        let outcome = self.player.try_move(direction, &self.rock);
        match outcome {
            MoveOutcome::Moved { from, to } => {
                log::debug!(
                    "Player {:?}: ({}, {}) -> ({}, {})",
                    direction,
                    from.x,
                    from.y,
                    to.x,
                    to.y
                );
                self.events.push(GameEvent::Moved { from, to });
            }
            MoveOutcome::Blocked(reason) => {
                log::debug!("Player {:?} blocked: {:?}", direction, reason);
                self.events.push(GameEvent::MoveBlocked { direction, reason });
            }
        }
        Some(outcome)
    }

    /// Move every enemy by `dt` seconds, resolving collisions as they happen
    ///
    /// Each enemy is checked right after it moves, so a reset caused by one
    /// enemy is seen by the enemies after it.
    pub fn update_enemies(&mut self, dt: f32) {
        let scale = self.settings.enemy_speed_scale;
        let wrap_x = self.settings.wrap_x;

        for i in 0..self.enemies.len() {
            let enemy = &mut self.enemies[i];
            let id = enemy.id;
            if enemy.update(dt, scale, wrap_x) {
                log::trace!("Enemy {} wrapped to {}", id, enemy.x);
                self.events.push(GameEvent::EnemyWrapped { enemy: id });
            }
            if self.enemies[i].hits(self.player.pos) {
                self.resolve_collision(id);
            }
        }
    }

    /// Resolve a pending goal reach. Returns true if one was resolved.
    pub fn update_player(&mut self) -> bool {
        if !self.player.reached_goal() {
            return false;
        }
        self.resolve_goal();
        true
    }

    /// Player back to start, rock moved, stars lost
    pub fn resolve_collision(&mut self, enemy: u32) {
        let stars_lost = self.stars.count;
        self.player.reset(&mut self.rng, self.settings.random_skins);
        self.rock.reset(&mut self.rng);
        self.stars.reset();

        self.stats.collisions += 1;
        log::info!("Caught by enemy {} (lost {} stars)", enemy, stars_lost);
        self.events.push(GameEvent::Collision { enemy, stars_lost });
    }

    /// Player back to start, rock moved, one star gained
    pub fn resolve_goal(&mut self) {
        self.player.reset(&mut self.rng, self.settings.random_skins);
        self.rock.reset(&mut self.rng);
        self.stars.increment();

        self.stats.goals += 1;
        self.stats.best_stars = self.stats.best_stars.max(self.stars.count);
        log::info!("Goal reached! Stars: {}", self.stars.count);
        self.events.push(GameEvent::GoalReached {
            stars: self.stars.count,
        });
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            phase: self.phase,
            player: self.player.clone(),
            rock: self.rock.clone(),
            enemies: self.enemies.clone(),
            stars: self.stars,
            stats: self.stats,
        }
    }
}
