//! Two-paddle Pong: W/S drive the left paddle, Up/Down the right one until
//! `T` hands it to the CPU, which oscillates between the field edges.

use crate::collision::collided;
use crate::config::Config;
use crate::entity::Entity;
use crate::input::{axis, Key, KeySource};
use glam::Vec2;

/// What happened during one [`PongState::update`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PongEvents {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    /// Set only on the frame the ball leaves the field.
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct PongState {
    pub left: Entity,
    pub right: Entity,
    pub ball: Entity,
    pub cpu_playing: bool,
    /// Vertical movement of the right paddle while the CPU drives it.
    pub cpu_direction: f32,
    pub game_over: bool,
    config: Config,
}

impl PongState {
    pub fn new(config: Config) -> Self {
        Self {
            left: Entity::new(config.left_paddle_start, config.paddle_scale),
            right: Entity::new(config.right_paddle_start, config.paddle_scale),
            ball: Entity::new(config.ball_start, config.ball_scale)
                .with_movement(config.ball_start_movement),
            cpu_playing: false,
            cpu_direction: 1.0,
            game_over: false,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Samples held keys into paddle movement. Does nothing but clear paddle
    /// movement once the game is over.
    pub fn process_input<K: KeySource + ?Sized>(&mut self, keys: &K) {
        self.left.movement = Vec2::ZERO;
        self.right.movement = Vec2::ZERO;

        if !self.game_over {
            self.left.movement.y = axis(keys, Key::W, Key::S);

            if self.cpu_playing {
                self.right.movement.y = self.cpu_direction;
            } else {
                self.right.movement.y = axis(keys, Key::Up, Key::Down);
            }

            if keys.is_down(Key::T) && !self.cpu_playing {
                log::info!("cpu takes over the right paddle");
                self.cpu_playing = true;
            }
        }

        self.left.normalize_movement();
        self.right.normalize_movement();
        self.ball.normalize_movement();
    }

    pub fn update(&mut self, dt: f32) -> PongEvents {
        let mut events = PongEvents::default();
        let paddle_speed = self.config.paddle_speed;

        self.left.advance(paddle_speed, dt);
        self.right.advance(paddle_speed, dt);
        self.ball.advance(self.config.ball_speed, dt);

        if !self.game_over && self.ball.position.x.abs() > self.config.field_max_x {
            log::info!(
                "ball left the field at ({:.2}, {:.2}), game over",
                self.ball.position.x,
                self.ball.position.y
            );
            self.game_over = true;
            events.game_over = true;
        }

        if self.game_over {
            self.ball.movement = Vec2::ZERO;
        } else {
            events.ball_hit_paddle = self.bounce_off_paddles();
            events.ball_hit_wall = self.bounce_off_walls();
        }

        clamp_paddle(&mut self.left, self.config.paddle_max_y());
        if let Some(edge) = clamp_paddle(&mut self.right, self.config.paddle_max_y()) {
            // point back into the field
            self.cpu_direction = -edge;
        }

        events
    }

    fn bounce_off_paddles(&mut self) -> bool {
        let mut hit = false;
        if collided(&self.ball, &self.left) {
            self.ball.movement.x = self.config.ball_return_x;
            hit = true;
        }
        if collided(&self.ball, &self.right) {
            self.ball.movement.x = -self.config.ball_return_x;
            hit = true;
        }
        hit
    }

    fn bounce_off_walls(&mut self) -> bool {
        let max_y = self.config.field_max_y;
        let y = self.ball.position.y;
        let vy = self.ball.movement.y;
        if (y > max_y && vy > 0.0) || (y < -max_y && vy < 0.0) {
            self.ball.movement.y = -vy;
            return true;
        }
        false
    }
}

impl Default for PongState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Keeps a paddle centre inside `[-max_y, max_y]`. Returns the sign of the
/// edge that was hit, if any.
fn clamp_paddle(paddle: &mut Entity, max_y: f32) -> Option<f32> {
    if paddle.position.y > max_y {
        paddle.position.y = max_y;
        Some(1.0)
    } else if paddle.position.y < -max_y {
        paddle.position.y = -max_y;
        Some(-1.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_reports_edge() {
        let mut p = Entity::new(Vec2::new(0.0, 4.0), Vec2::ONE);
        assert_eq!(clamp_paddle(&mut p, 3.0), Some(1.0));
        assert_eq!(p.position.y, 3.0);

        p.position.y = -3.5;
        assert_eq!(clamp_paddle(&mut p, 3.0), Some(-1.0));
        assert_eq!(p.position.y, -3.0);

        p.position.y = 0.5;
        assert_eq!(clamp_paddle(&mut p, 3.0), None);
    }

    #[test]
    fn starts_from_configured_layout() {
        let state = PongState::default();
        assert_eq!(state.left.position, Vec2::new(-4.8, 0.0));
        assert_eq!(state.right.position, Vec2::new(4.8, 0.0));
        assert_eq!(state.ball.movement, Vec2::new(-0.5, 0.2));
        assert!(!state.cpu_playing);
        assert!(!state.game_over);
    }
}
