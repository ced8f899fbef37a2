use crate::entity::Entity;
use glam::Vec2;

/// Per-axis gap between two boxes: centre distance minus half the combined
/// extents. A negative component means the boxes overlap on that axis.
pub fn overlap_distances(a: &Entity, b: &Entity) -> Vec2 {
    (a.position - b.position).abs() - (a.half_extents() + b.half_extents())
}

/// Axis-aligned overlap test. Boxes that only touch do not collide.
pub fn collided(a: &Entity, b: &Entity) -> bool {
    let d = overlap_distances(a, b);
    d.x < 0.0 && d.y < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_boxes_collide() {
        let paddle = boxed(-4.8, 0.0, 0.5, 1.2);
        let ball = boxed(-4.3, 0.4, 0.75, 0.75);
        assert!(collided(&ball, &paddle));
    }

    #[test]
    fn overlap_on_one_axis_is_not_enough() {
        let paddle = boxed(-4.8, 0.0, 0.5, 1.2);
        let above = boxed(-4.8, 2.0, 0.75, 0.75);
        let beside = boxed(-3.0, 0.0, 0.75, 0.75);
        assert!(!collided(&above, &paddle));
        assert!(!collided(&beside, &paddle));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = boxed(0.0, 0.0, 1.0, 1.0);
        let b = boxed(1.0, 0.0, 1.0, 1.0);
        assert_eq!(overlap_distances(&a, &b).x, 0.0);
        assert!(!collided(&a, &b));
    }

    #[test]
    fn distances_use_combined_extents() {
        let a = boxed(0.0, 0.0, 0.5, 1.2);
        let b = boxed(1.0, 2.0, 0.75, 0.75);
        let d = overlap_distances(&a, &b);
        assert!(d.abs_diff_eq(Vec2::new(1.0 - 0.625, 2.0 - 0.975), 1e-6));
    }

    proptest! {
        #[test]
        fn collision_is_symmetric(
            ax in -5.0f32..5.0, ay in -5.0f32..5.0, aw in 0.1f32..2.0, ah in 0.1f32..2.0,
            bx in -5.0f32..5.0, by in -5.0f32..5.0, bw in 0.1f32..2.0, bh in 0.1f32..2.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(collided(&a, &b), collided(&b, &a));
            prop_assert_eq!(overlap_distances(&a, &b), overlap_distances(&b, &a));
        }

        #[test]
        fn collided_iff_both_distances_negative(
            ax in -5.0f32..5.0, ay in -5.0f32..5.0,
            bx in -5.0f32..5.0, by in -5.0f32..5.0,
        ) {
            let a = boxed(ax, ay, 0.75, 0.75);
            let b = boxed(bx, by, 0.5, 1.2);
            let d = overlap_distances(&a, &b);
            prop_assert_eq!(collided(&a, &b), d.x < 0.0 && d.y < 0.0);
        }
    }
}
