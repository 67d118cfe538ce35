use crate::{AngleInterval, SweepDirection};

/// The bearings of a view cone together with the intervals occluding it.
///
/// A map is built once per query and never mutated: occluders are sorted by the
/// bearing at which the sweep meets them, and [`CoverageMap::widest_free`] walks them
/// in that order, merging overlapping occluders as it goes.
#[derive(Debug, Clone)]
pub struct CoverageMap {
    cone: AngleInterval,
    direction: SweepDirection,
    occluders: Vec<AngleInterval>,
}

impl CoverageMap {
    pub fn new(
        cone: AngleInterval,
        direction: SweepDirection,
        occluders: impl IntoIterator<Item = AngleInterval>,
    ) -> Self {
        let mut occluders: Vec<AngleInterval> = occluders.into_iter().collect();
        // Stable, so occluders starting at the same bearing keep their input order
        occluders.sort_by(|a, b| direction.keys(a).0.total_cmp(&direction.keys(b).0));
        Self {
            cone,
            direction,
            occluders,
        }
    }

    pub fn cone(&self) -> AngleInterval {
        self.cone
    }

    /// The occluders in sweep order.
    pub fn occluders(&self) -> &[AngleInterval] {
        &self.occluders
    }

    /// Finds the widest part of the cone not covered by any occluder.
    ///
    /// When several gaps are equally wide, the one the sweep reaches first wins. A
    /// fully covered cone yields an empty interval.
    pub fn widest_free(&self) -> AngleInterval {
        let (cone_start, cone_end) = self.direction.keys(&self.cone);

        let mut covered_until = cone_start;
        let mut best = (cone_start, cone_start);
        for occluder in &self.occluders {
            let (start, end) = self.direction.keys(occluder);
            let gap_end = start.min(cone_end);
            if gap_end - covered_until > best.1 - best.0 {
                best = (covered_until, gap_end);
            }
            covered_until = covered_until.max(end);
        }
        if cone_end - covered_until > best.1 - best.0 {
            best = (covered_until, cone_end);
        }

        self.direction.interval_from_keys(best.0, best.1)
    }
}

/// Shorthand for building a [`CoverageMap`] and querying its widest free interval.
pub fn widest_free_interval(
    cone: AngleInterval,
    direction: SweepDirection,
    occluders: impl IntoIterator<Item = AngleInterval>,
) -> AngleInterval {
    CoverageMap::new(cone, direction, occluders).widest_free()
}
