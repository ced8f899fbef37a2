use glam::Vec2;

/// A sprite on the play field: where it is, where it is heading, how big it is.
///
/// `movement` is a direction of at most unit length; the actual velocity is
/// `movement * speed`, with the speed owned by whoever advances the entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub movement: Vec2,
    pub scale: Vec2,
}

impl Entity {
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            movement: Vec2::ZERO,
            scale,
        }
    }

    pub fn with_movement(mut self, movement: Vec2) -> Self {
        self.movement = movement;
        self
    }

    /// Shrinks `movement` to unit length so diagonal input is not faster.
    pub fn normalize_movement(&mut self) {
        if self.movement.length() > 1.0 {
            self.movement = self.movement.normalize();
        }
    }

    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.position += self.movement * speed * dt;
    }

    pub fn half_extents(&self) -> Vec2 {
        self.scale / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut e = Entity::new(Vec2::ZERO, Vec2::ONE).with_movement(Vec2::new(1.0, 1.0));
        e.normalize_movement();
        assert!(e.movement.abs_diff_eq(Vec2::splat(std::f32::consts::FRAC_1_SQRT_2), 1e-6));
    }

    #[test]
    fn short_movement_is_left_alone() {
        let mut e = Entity::new(Vec2::ZERO, Vec2::ONE).with_movement(Vec2::new(-0.5, 0.2));
        e.normalize_movement();
        assert_eq!(e.movement, Vec2::new(-0.5, 0.2));
    }

    #[test]
    fn half_extents_are_half_the_scale() {
        let e = Entity::new(Vec2::ZERO, Vec2::new(0.5, 1.2));
        assert!(e.half_extents().abs_diff_eq(Vec2::new(0.25, 0.6), 1e-6));
    }

    #[test]
    fn advance_integrates_movement_times_speed() {
        let mut e = Entity::new(Vec2::new(1.0, 1.0), Vec2::ONE).with_movement(Vec2::new(0.0, -1.0));
        e.advance(6.0, 0.5);
        assert!(e.position.abs_diff_eq(Vec2::new(1.0, -2.0), 1e-6));
    }
}
