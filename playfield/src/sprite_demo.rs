use crate::config::Config;
use crate::entity::Entity;
use crate::input::{axis, Key, KeySource};
use glam::Vec2;

/// A single sprite steered with the arrow keys. No bounds.
#[derive(Debug, Clone)]
pub struct SpriteDemoState {
    pub player: Entity,
    pub speed: f32,
}

impl SpriteDemoState {
    pub fn new(config: &Config) -> Self {
        Self {
            player: Entity::new(Vec2::ZERO, config.sprite_scale),
            speed: config.sprite_speed,
        }
    }

    pub fn process_input<K: KeySource + ?Sized>(&mut self, keys: &K) {
        self.player.movement = Vec2::new(
            -axis(keys, Key::Left, Key::Right),
            axis(keys, Key::Up, Key::Down),
        );
        self.player.normalize_movement();
    }

    pub fn update(&mut self, dt: f32) {
        self.player.advance(self.speed, dt);
    }
}

impl Default for SpriteDemoState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
