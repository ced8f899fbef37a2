//! Orthographic camera over the play field.

use crate::config::Config;
use crate::entity::Entity;
use glam::{Mat4, Vec3};

/// View and projection matrices for the 2D play field.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Maps `[-half_width, half_width] x [-half_height, half_height]` onto
    /// clip space with an identity view.
    pub fn orthographic(half_width: f32, half_height: f32) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::orthographic_rh_gl(
                -half_width,
                half_width,
                -half_height,
                half_height,
                -1.0,
                1.0,
            ),
        }
    }

    pub fn for_field(config: &Config) -> Self {
        Self::orthographic(config.field_max_x, config.field_max_y)
    }
}

/// `translate(position) * scale(scale)` for a unit quad centred on the origin.
pub fn model_matrix(entity: &Entity) -> Mat4 {
    Mat4::from_translation(entity.position.extend(0.0))
        * Mat4::from_scale(Vec3::new(entity.scale.x, entity.scale.y, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec4};

    #[test]
    fn field_corners_map_to_clip_corners() {
        let camera = Camera::for_field(&Config::default());
        let top_right = camera.projection * Vec4::new(5.0, 3.75, 0.0, 1.0);
        let bottom_left = camera.projection * Vec4::new(-5.0, -3.75, 0.0, 1.0);
        assert!(top_right.abs_diff_eq(Vec4::new(1.0, 1.0, 0.0, 1.0), 1e-6));
        assert!(bottom_left.abs_diff_eq(Vec4::new(-1.0, -1.0, 0.0, 1.0), 1e-6));
        assert_eq!(camera.view, Mat4::IDENTITY);
    }

    #[test]
    fn model_matrix_scales_then_translates() {
        let e = Entity::new(Vec2::new(-4.8, 1.0), Vec2::new(0.5, 1.2));
        let corner = model_matrix(&e) * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!(corner.abs_diff_eq(Vec4::new(-4.55, 1.6, 0.0, 1.0), 1e-6));
    }
}
