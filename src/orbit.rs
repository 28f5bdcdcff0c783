//! Ring layout math for the orbital skill display.
//!
//! Nodes are distributed at equal angular intervals around one of three
//! concentric rings. Each ring starts from its own fixed offset angle so
//! nodes on different rings don't line up radially. Radii are fixed
//! fractions of the measured container's smaller dimension, so the whole
//! system scales with the viewport without breakpoints.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6, TAU};

pub const RING_COUNT: usize = 3;

/// Radius of each ring as a fraction of the container's smaller dimension,
/// inner ring first.
pub const RING_FRACTIONS: [f64; RING_COUNT] = [0.16, 0.28, 0.40];

/// Start angle for the first node on each ring.
pub const RING_OFFSETS: [f64; RING_COUNT] = [-FRAC_PI_4, FRAC_PI_6, 0.0];

/// Compute all three ring radii from the measured container size.
pub fn ring_radii(width: f64, height: f64) -> [f64; RING_COUNT] {
    let base = width.min(height).max(0.0);
    RING_FRACTIONS.map(|f| f * base)
}

/// Angle of slot `slot` out of `count` evenly spaced slots on a ring.
///
/// A single node sits exactly at the ring's offset; an empty ring is the
/// caller's no-op, but passing `count == 0` degenerates to the offset
/// rather than dividing by zero.
pub fn node_angle(slot: usize, count: usize, offset: f64) -> f64 {
    if count == 0 {
        return offset;
    }
    offset + (slot as f64 / count as f64) * TAU
}

/// Cartesian position of a slot relative to the ring center.
pub fn node_position(slot: usize, count: usize, radius: f64, offset: f64) -> (f64, f64) {
    let angle = node_angle(slot, count, offset);
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_nodes_evenly_spaced() {
        for count in 1..=12 {
            let step = TAU / count as f64;
            for slot in 1..count {
                let prev = node_angle(slot - 1, count, 0.3);
                let curr = node_angle(slot, count, 0.3);
                assert!(
                    (curr - prev - step).abs() < EPSILON,
                    "uneven step for slot {slot} of {count}"
                );
            }
        }
    }

    #[test]
    fn test_single_node_sits_at_offset() {
        for (ring, offset) in RING_OFFSETS.iter().enumerate() {
            let angle = node_angle(0, 1, *offset);
            assert!((angle - offset).abs() < EPSILON, "ring {ring}");
            let (x, y) = node_position(0, 1, 100.0, *offset);
            assert!((x - 100.0 * offset.cos()).abs() < EPSILON);
            assert!((y - 100.0 * offset.sin()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_zero_count_degenerates_to_offset() {
        assert!((node_angle(0, 0, 1.5) - 1.5).abs() < EPSILON);
        let (x, y) = node_position(0, 0, 50.0, 0.0);
        assert!((x - 50.0).abs() < EPSILON);
        assert!(y.abs() < EPSILON);
    }

    #[test]
    fn test_radii_track_smaller_dimension() {
        let radii = ring_radii(1000.0, 650.0);
        for (i, r) in radii.iter().enumerate() {
            assert!((r - RING_FRACTIONS[i] * 650.0).abs() < EPSILON);
        }
        // scaling the container scales every ring by the same factor
        let doubled = ring_radii(2000.0, 1300.0);
        for (r, d) in radii.iter().zip(doubled.iter()) {
            assert!((d - 2.0 * r).abs() < EPSILON);
        }
    }

    #[test]
    fn test_radii_ordered_inner_to_outer() {
        let radii = ring_radii(800.0, 800.0);
        assert!(radii[0] < radii[1]);
        assert!(radii[1] < radii[2]);
    }

    #[test]
    fn test_empty_container_collapses_rings() {
        assert_eq!(ring_radii(0.0, 500.0), [0.0; RING_COUNT]);
        assert_eq!(ring_radii(-10.0, 500.0), [0.0; RING_COUNT]);
    }
}
