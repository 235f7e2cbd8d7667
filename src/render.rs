//! Rendering contract
//!
//! The game never touches images. Each frame it hands the renderer a list of
//! (sprite, position) pairs in a fixed order: rock, enemies, player, stars.
//! Later draws cover earlier ones.

use glam::Vec2;

use crate::sim::{Entity, GameState, Sprite};

/// Anything that can draw a sprite at a pixel position
pub trait SpriteSink {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: Sprite,
    pub pos: Vec2,
}

/// Records draw calls for a frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}

impl SpriteSink for DrawList {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2) {
        self.commands.push(DrawCommand { sprite, pos });
    }
}

fn draw_entity(sink: &mut impl SpriteSink, entity: &impl Entity) {
    sink.draw_sprite(entity.sprite(), entity.draw_pos());
}

/// Draw one frame of `state`
pub fn render<R>(state: &GameState<R>, sink: &mut impl SpriteSink) {
    draw_entity(sink, &state.rock);
    for enemy in &state.enemies {
        draw_entity(sink, enemy);
    }
    draw_entity(sink, &state.player);
    for pos in state.stars.icon_positions() {
        sink.draw_sprite(state.stars.sprite(), pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::ScriptedRng;

    #[test]
    fn test_draw_order() {
        let settings = Settings {
            enemy_count: 2,
            random_skins: false,
            ..Settings::default()
        };
        // enemies: (row 1, 11, speed 1), (row 3, -40, speed 2); rock (4, lane 1)
        let rng = ScriptedRng::new([1, 11, 1, 3, 40, 2, 4, 1]);
        let mut state = GameState::with_rng(settings, rng);
        state.stars.count = 2;

        let mut list = DrawList::new();
        render(&state, &mut list);

        let expected = vec![
            DrawCommand { sprite: Sprite::Rock, pos: Vec2::new(404.0, 146.0) },
            DrawCommand { sprite: Sprite::EnemyBug, pos: Vec2::new(11.0, 63.0) },
            DrawCommand { sprite: Sprite::EnemyBug, pos: Vec2::new(-40.0, 229.0) },
            DrawCommand { sprite: Sprite::CharBoy, pos: Vec2::new(202.0, 395.0) },
            DrawCommand { sprite: Sprite::Star, pos: Vec2::new(0.0, 0.0) },
            DrawCommand { sprite: Sprite::Star, pos: Vec2::new(101.0, 0.0) },
        ];
        assert_eq!(list.commands, expected);
    }
}
