//! Overlap predicates shared by both games.

/// Axis-aligned rectangle overlap. Boxes are (min x, min y, width, height);
/// touching edges do not count as overlap.
pub fn aabb_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
}

/// Circular-distance overlap between two centers.
pub fn circles_overlap(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let reach = r1 + r2;
    dx * dx + dy * dy < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_overlapping_and_separated() {
        assert!(aabb_overlap(0.0, 0.0, 10.0, 10.0, 5.0, 5.0, 10.0, 10.0));
        assert!(!aabb_overlap(0.0, 0.0, 10.0, 10.0, 20.0, 0.0, 10.0, 10.0));
        // Separated on y only
        assert!(!aabb_overlap(0.0, 0.0, 10.0, 10.0, 5.0, 15.0, 10.0, 10.0));
    }

    #[test]
    fn aabb_touching_edges_do_not_collide() {
        assert!(!aabb_overlap(0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn circles_by_center_distance() {
        assert!(circles_overlap(0.0, 0.0, 5.0, 7.0, 0.0, 5.0));
        assert!(!circles_overlap(0.0, 0.0, 5.0, 10.0, 0.0, 5.0)); // exactly touching
        assert!(!circles_overlap(0.0, 0.0, 2.0, 5.0, 5.0, 2.0));
    }
}
