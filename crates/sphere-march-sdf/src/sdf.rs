#![allow(missing_docs)]

use glam::Vec2;

#[inline]
fn hypot(v: Vec2) -> f32 {
    #[cfg(target_arch = "spirv")]
    let k = v.length();
    #[cfg(not(target_arch = "spirv"))]
    let k = v.x.hypot(v.y);
    k
}

/// Distance from `pos` to the boundary of a circle.
///
/// Negative inside, but only the outside values are a tight bound.
#[inline]
pub fn sd_circle(pos: Vec2, center: Vec2, radius: f32) -> f32 {
    hypot(pos - center) - radius
}

/// Euclidean distance from `pos` to an axis-aligned rectangle.
///
/// Each axis contributes how far `pos` sticks out past the `[min, max]` span
/// (zero if it is within it). Zero anywhere inside or on the rectangle.
#[inline]
pub fn sd_rect(pos: Vec2, min: Vec2, max: Vec2) -> f32 {
    let overflow = (min - pos).max(pos - max).max(Vec2::ZERO);
    hypot(overflow)
}

#[inline]
pub fn sd_op_union(d1: f32, d2: f32) -> f32 {
    if d1 < d2 {
        d1
    } else {
        d2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_is_center_distance_minus_radius() {
        let center = Vec2::new(3.0, -2.0);
        for pos in [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 4.0),
            Vec2::new(3.0, -2.0),
            Vec2::new(-7.5, 100.0),
        ] {
            let expected = (pos - center).length() - 1.5;
            assert!((sd_circle(pos, center, 1.5) - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn rect_distances() {
        let min = Vec2::ZERO;
        let max = Vec2::splat(10.0);
        assert_eq!(sd_rect(Vec2::new(5.0, 5.0), min, max), 0.0);
        assert_eq!(sd_rect(Vec2::new(10.0, 3.0), min, max), 0.0);
        assert!((sd_rect(Vec2::new(15.0, 5.0), min, max) - 5.0).abs() < 1e-6);
        assert!((sd_rect(Vec2::new(5.0, -2.0), min, max) - 2.0).abs() < 1e-6);
        assert!((sd_rect(Vec2::new(15.0, 15.0), min, max) - 50.0_f32.sqrt()).abs() < 1e-5);
        assert!((sd_rect(Vec2::new(-3.0, -4.0), min, max) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn union_picks_smaller() {
        assert_eq!(sd_op_union(1.0, 2.0), 1.0);
        assert_eq!(sd_op_union(3.0, -2.0), -2.0);
    }
}
