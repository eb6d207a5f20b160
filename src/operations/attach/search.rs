use crate::lattice::LatticeVector;

/// Translations at exactly `distance` under the hexagonal lattice metric.
///
/// These lie on the diamond boundary `|dx| = d`, `|dy| = d` or
/// `|dx + dy| = d`, inside `|dx|, |dy|, |dx + dy| <= d`. They are yielded
/// by ascending `dx`, then ascending `dy`. Distance 0 yields only the zero
/// translation; every other distance yields `6 * d` translations.
pub fn ring_offsets(distance: u32) -> impl Iterator<Item = LatticeVector> {
    let d = i64::from(distance);
    (-d..=d).flat_map(move |dx| {
        let lo = (-d).max(-d - dx);
        let hi = d.min(d - dx);
        // Inner columns only touch the boundary at their two ends.
        let step = if dx.abs() == d { 1 } else { (hi - lo).max(1) };
        (lo..=hi)
            .step_by(usize::try_from(step).unwrap_or(1))
            .map(move |dy| LatticeVector::new(dx, dy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(distance: u32) -> Vec<(i64, i64)> {
        ring_offsets(distance).map(|v| (v.dx, v.dy)).collect()
    }

    #[test]
    fn distance_zero_is_identity() {
        assert_eq!(offsets(0), vec![(0, 0)]);
    }

    #[test]
    fn first_ring_order() {
        assert_eq!(
            offsets(1),
            vec![(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)]
        );
    }

    #[test]
    fn second_ring_order() {
        assert_eq!(
            offsets(2),
            vec![
                (-2, 0),
                (-2, 1),
                (-2, 2),
                (-1, -1),
                (-1, 2),
                (0, -2),
                (0, 2),
                (1, -2),
                (1, 1),
                (2, -2),
                (2, -1),
                (2, 0),
            ]
        );
    }

    #[test]
    fn rings_are_exact_and_complete() {
        for d in 1..40u32 {
            let ring: Vec<LatticeVector> = ring_offsets(d).collect();
            assert_eq!(ring.len(), 6 * d as usize, "d = {d}");
            assert!(ring.iter().all(|v| v.ring_distance() == u64::from(d)));
            let mut sorted = ring.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted, ring, "d = {d}");
        }
    }
}
