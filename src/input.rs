//! Key decoding
//!
//! Front ends deliver keys as names: arrow names ("left", "ArrowUp", ...)
//! or the WASD letters. Anything else decodes to `None` and is dropped.

use crate::sim::{Direction, TickInput};

/// Direction for a key name, case-insensitive
pub fn direction_from_key_name(name: &str) -> Option<Direction> {
    match name.trim().to_lowercase().as_str() {
        "left" | "arrowleft" | "a" => Some(Direction::Left),
        "up" | "arrowup" | "w" => Some(Direction::Up),
        "right" | "arrowright" | "d" => Some(Direction::Right),
        "down" | "arrowdown" | "s" => Some(Direction::Down),
        _ => None,
    }
}

/// Queue a key name into the next frame's input. Returns false if ignored.
pub fn queue_key_name(input: &mut TickInput, name: &str) -> bool {
    match direction_from_key_name(name) {
        Some(direction) => {
            input.moves.push(direction);
            true
        }
        None => {
            log::debug!("Ignoring key {:?}", name);
            false
        }
    }
}
