use glam::Vec2;

/// Tuning constants for both programs, in play-field units.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Play field, centred on the origin
    pub const FIELD_MAX_X: f32 = 5.0;
    pub const FIELD_MAX_Y: f32 = 3.75;

    // Paddles
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const PADDLE_SCALE: Vec2 = Vec2::new(0.5, 1.2);
    pub const LEFT_PADDLE_START: Vec2 = Vec2::new(-4.8, 0.0);
    pub const RIGHT_PADDLE_START: Vec2 = Vec2::new(4.8, 0.0);

    // Ball
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_SCALE: Vec2 = Vec2::new(0.75, 0.75);
    pub const BALL_START: Vec2 = Vec2::new(2.0, 0.0);
    pub const BALL_START_MOVEMENT: Vec2 = Vec2::new(-0.5, 0.2);
    pub const BALL_RETURN_X: f32 = 0.5;

    // Sprite demo
    pub const SPRITE_SPEED: f32 = 5.0;
    pub const SPRITE_SCALE: Vec2 = Vec2::ONE;
}

/// Runtime configuration, seeded from [`Params`].
#[derive(Debug, Clone)]
pub struct Config {
    pub field_max_x: f32,
    pub field_max_y: f32,
    pub paddle_speed: f32,
    pub paddle_scale: Vec2,
    pub left_paddle_start: Vec2,
    pub right_paddle_start: Vec2,
    pub ball_speed: f32,
    pub ball_scale: Vec2,
    pub ball_start: Vec2,
    pub ball_start_movement: Vec2,
    /// Horizontal movement given to the ball when it leaves a paddle.
    pub ball_return_x: f32,
    pub sprite_speed: f32,
    pub sprite_scale: Vec2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_max_x: Params::FIELD_MAX_X,
            field_max_y: Params::FIELD_MAX_Y,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_scale: Params::PADDLE_SCALE,
            left_paddle_start: Params::LEFT_PADDLE_START,
            right_paddle_start: Params::RIGHT_PADDLE_START,
            ball_speed: Params::BALL_SPEED,
            ball_scale: Params::BALL_SCALE,
            ball_start: Params::BALL_START,
            ball_start_movement: Params::BALL_START_MOVEMENT,
            ball_return_x: Params::BALL_RETURN_X,
            sprite_speed: Params::SPRITE_SPEED,
            sprite_scale: Params::SPRITE_SCALE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest y a paddle centre may reach before it is clamped.
    pub fn paddle_max_y(&self) -> f32 {
        self.field_max_y - self.paddle_scale.y / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paddle_travel_leaves_half_a_paddle_at_each_edge() {
        let config = Config::default();
        assert!((config.paddle_max_y() - 3.15).abs() < 1e-6);
    }
}
