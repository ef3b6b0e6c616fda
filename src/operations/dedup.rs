use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::model::{BarrierKey, CanonicalHit, RayHit};

/// Reduces one element's raw ray hits to one hit per crossed barrier.
///
/// Hits farther than `max_proximity` (the element's length) are dropped;
/// the boundary is inclusive. Remaining hits are grouped by
/// [`BarrierKey`] and the closest hit of each group is kept. Proximity
/// plays no part in identity: two hits on the same barrier collapse no
/// matter how far apart they are.
///
/// The result is sorted by proximity, ties broken by key, so the output
/// is reproducible and running it through again changes nothing.
#[must_use]
pub fn deduplicate(hits: &[RayHit], max_proximity: f64) -> Vec<CanonicalHit> {
    let mut slots: FxHashMap<BarrierKey, usize> = FxHashMap::default();
    let mut kept: Vec<RayHit> = Vec::with_capacity(hits.len());

    for hit in hits
        .iter()
        .filter(|h| (0.0..=max_proximity).contains(&h.proximity))
    {
        match slots.entry(hit.barrier) {
            Entry::Occupied(slot) => {
                let current = &mut kept[*slot.get()];
                if hit.proximity < current.proximity {
                    *current = *hit;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(*hit);
            }
        }
    }

    kept.sort_by(|a, b| {
        a.proximity
            .total_cmp(&b.proximity)
            .then_with(|| a.barrier.cmp(&b.barrier))
    });
    kept.into_iter().map(CanonicalHit::new).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::ElementId;

    fn hit(proximity: f64, barrier: i64) -> RayHit {
        RayHit::new(proximity, BarrierKey::local(ElementId(barrier)))
    }

    fn keys(hits: &[CanonicalHit]) -> Vec<BarrierKey> {
        hits.iter().map(|h| h.barrier).collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(deduplicate(&[], 100.0).is_empty());
    }

    #[test]
    fn near_identical_hits_on_one_barrier_collapse() {
        let hits = [hit(10.0, 1), hit(10.0001, 1), hit(50.0, 2)];
        let out = deduplicate(&hits, 100.0);
        assert_eq!(out.len(), 2);
        assert_eq!(keys(&out), vec![BarrierKey::local(ElementId(1)), BarrierKey::local(ElementId(2))]);
        assert!((out[0].proximity - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn closest_hit_represents_its_barrier() {
        let hits = [hit(30.0, 1), hit(10.0, 1), hit(20.0, 1)];
        let out = deduplicate(&hits, 100.0);
        assert_eq!(out.len(), 1);
        assert!((out[0].proximity - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn length_boundary_is_inclusive() {
        let out = deduplicate(&[hit(300.0, 1), hit(350.0, 2)], 300.0);
        assert_eq!(keys(&out), vec![BarrierKey::local(ElementId(1))]);
    }

    #[test]
    fn hit_beyond_run_is_dropped_even_if_barrier_also_hit_inside() {
        let out = deduplicate(&[hit(350.0, 1), hit(120.0, 1)], 300.0);
        assert_eq!(out.len(), 1);
        assert!((out[0].proximity - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn linked_id_distinguishes_barriers() {
        let local = RayHit::new(10.0, BarrierKey::local(ElementId(1)));
        let linked = RayHit::new(10.0, BarrierKey::linked(ElementId(1), ElementId(77)));
        let out = deduplicate(&[local, linked, local], 100.0);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn invalid_proximities_are_ignored() {
        let out = deduplicate(&[hit(f64::NAN, 1), hit(-1.0, 2), hit(5.0, 3)], 100.0);
        assert_eq!(keys(&out), vec![BarrierKey::local(ElementId(3))]);
    }

    #[test]
    fn output_is_sorted_by_proximity() {
        let out = deduplicate(&[hit(80.0, 3), hit(20.0, 1), hit(50.0, 2)], 100.0);
        let proximities: Vec<f64> = out.iter().map(|h| h.proximity).collect();
        assert_eq!(proximities, vec![20.0, 50.0, 80.0]);
    }

    #[test]
    fn deduplication_is_idempotent() {
        let hits = [hit(90.0, 2), hit(10.0, 1), hit(10.5, 1), hit(95.0, 2), hit(40.0, 3)];
        let once = deduplicate(&hits, 100.0);
        let raw: Vec<RayHit> = once.iter().map(|h| h.into_hit()).collect();
        let twice = deduplicate(&raw, 100.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_two_outputs_share_a_key() {
        let hits: Vec<RayHit> = (0..50)
            .map(|i| hit(f64::from(i), i64::from(i % 7)))
            .collect();
        let out = deduplicate(&hits, 100.0);
        let mut seen = keys(&out);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), out.len());
        assert_eq!(out.len(), 7);
    }
}
