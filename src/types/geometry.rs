//! 2D line helpers used by the dimension solvers

use super::Vector2;

/// Intersection of the infinite lines `p1 + t * d1` and `p2 + u * d2`
///
/// Returns `None` when the directions are parallel.
pub fn line_intersection(p1: Vector2, d1: Vector2, p2: Vector2, d2: Vector2) -> Option<Vector2> {
    if d1.is_parallel_to(&d2) {
        return None;
    }
    let cross = d1.cross(&d2);
    let t = (p2 - p1).cross(&d2) / cross;
    Some(p1 + d1 * t)
}

/// Normalize an angle in radians into [0, 2π)
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(std::f64::consts::TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if a >= std::f64::consts::TAU {
        0.0
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_line_intersection() {
        let p = line_intersection(
            Vector2::new(0.0, 1.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 5.0),
            Vector2::new(0.0, -1.0),
        )
        .unwrap();
        assert!(p.approx_eq(&Vector2::new(2.0, 1.0), 1e-12));
    }

    #[test]
    fn test_line_intersection_outside_segments() {
        let p = line_intersection(
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(1.0, 0.0),
        )
        .unwrap();
        assert!(p.approx_eq(&Vector2::ZERO, 1e-12));
    }

    #[test]
    fn test_parallel_lines_do_not_intersect() {
        assert!(line_intersection(
            Vector2::ZERO,
            Vector2::UNIT_X,
            Vector2::UNIT_Y,
            Vector2::new(-3.0, 0.0),
        )
        .is_none());
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((normalize_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
        assert_eq!(normalize_angle(0.0), 0.0);
    }
}
