use crate::interval::Interval;
use crate::seq::intervals::Intervals;

/// Result of an overlap scan. See [`Intervals::analyze_overlaps`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Overlaps {
    /// Intervals that no earlier interval overlaps.
    pub originals: Vec<Interval>,
    /// Fully equal copies of an original.
    pub duplicates: Vec<Interval>,
    /// Overlapping parts, named `"<original>,<other>"`.
    pub overlaps: Vec<Interval>,
}

impl Overlaps {
    /// No duplicates and no overlaps were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.overlaps.is_empty()
    }
}

/// Overlap analysis
impl Intervals {
    /// Single greedy pass over the start-sorted members. Each original
    /// claims every following interval that starts before its end: equal
    /// ones become duplicates, the rest contribute the part left of the
    /// original's end as an overlap. Claimed intervals are never originals
    /// themselves, so a chain `A ~ B ~ C` where only `B` meets `C` reports
    /// `C` as original.
    pub fn analyze_overlaps(&self) -> Overlaps {
        let tis = self.as_slice();
        let mut res = Overlaps::default();

        let mut i = 0;
        while i < tis.len() {
            let orig = &tis[i];
            res.originals.push(orig.clone());

            let mut next = tis.len();
            for (j, other) in tis.iter().enumerate().skip(i + 1) {
                if other.st() >= orig.en() {
                    next = j;
                    break;
                }
                if other.is_equal(orig) {
                    res.duplicates.push(other.clone());
                    continue;
                }
                let mut overlap = other.trim_right(orig.en());
                overlap.set_name(format!("{},{}", orig.name(), other.name()));
                res.overlaps.push(overlap);
            }
            i = next;
        }

        log::debug!(
            "{} originals, {} duplicates, {} overlaps",
            res.originals.len(),
            res.duplicates.len(),
            res.overlaps.len()
        );
        res
    }
}
