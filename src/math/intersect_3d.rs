use super::{Point3, Vector3, TOLERANCE};

/// Intersects the ray `origin + t * dir` with a triangle (Möller–Trumbore).
///
/// Returns the ray parameter `t` of the hit, or `None` if the ray misses,
/// runs parallel to the triangle, or hits behind its origin. Hits exactly on
/// an edge count as hits.
#[must_use]
pub fn ray_triangle_intersect(
    origin: &Point3,
    dir: &Vector3,
    triangle: [&Point3; 3],
) -> Option<f64> {
    let [a, b, c] = triangle;
    let e1 = b - a;
    let e2 = c - a;

    let p = dir.cross(&e2);
    let det = e1.dot(&p);
    if det.abs() < TOLERANCE {
        return None;
    }
    let inv_det = 1.0 / det;

    let s = origin - a;
    let u = s.dot(&p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&e1);
    let v = dir.dot(&q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(&q) * inv_det;
    (t > TOLERANCE).then_some(t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn hits_triangle_interior() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        let t = ray_triangle_intersect(&p(0.5, 5.0, 0.5), &-Vector3::y(), [&a, &b, &c]).unwrap();
        assert_relative_eq!(t, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn misses_outside_triangle() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        let hit = ray_triangle_intersect(&p(1.5, 5.0, 1.5), &-Vector3::y(), [&a, &b, &c]);
        assert!(hit.is_none());
    }

    #[test]
    fn ignores_hits_behind_origin() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        let hit = ray_triangle_intersect(&p(0.5, 5.0, 0.5), &Vector3::y(), [&a, &b, &c]);
        assert!(hit.is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        let hit = ray_triangle_intersect(&p(-1.0, 0.0, 0.5), &Vector3::x(), [&a, &b, &c]);
        assert!(hit.is_none());
    }
}
