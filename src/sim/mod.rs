//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - All randomness through an injected `RandomSource`
//! - Stable iteration order (enemies by id)
//! - No rendering or platform dependencies

pub mod enemy;
pub mod entity;
pub mod player;
pub mod rng;
pub mod rock;
pub mod stars;
pub mod state;
pub mod tick;

pub use enemy::{Enemy, Lane};
pub use entity::{Entity, Sprite};
pub use player::{BlockReason, Direction, MoveOutcome, Player, PlayerPhase};
pub use rng::{RandomSource, ScriptedRng, seeded};
pub use rock::Rock;
pub use stars::StarCounter;
pub use state::{GameEvent, GamePhase, GameState, SessionStats, Snapshot};
pub use tick::{TickInput, tick};
