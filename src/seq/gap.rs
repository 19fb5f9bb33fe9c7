use crate::interval::Interval;
use crate::kind::SpanKind;
use crate::seq::intervals::{Intervals, exclude_each};

/// Gap analysis
impl Intervals {
    /// Members plus the parts of `bounds` that no member covers, each gap
    /// classified by where it sits within `bounds`:
    ///
    /// ```text
    /// bounds:    [                              ]
    /// occupied:       [  ]       [    ]
    /// result:    [<<<][__][GGGGG][____][>>>>>>>>]
    /// ```
    ///
    /// When nothing of `bounds` is covered the single gap is a whole gap.
    /// Gaps never carry names: even a whole gap is a minimal copy of
    /// `bounds` and does not keep its name. The result is a new collection,
    /// re-sorted and re-indexed.
    pub fn analyze_relative_to(&self, bounds: &Interval) -> Intervals {
        let gaps = self
            .iter()
            .fold(vec![bounds.clone_min()], |gaps, occupied| exclude_each(&gaps, occupied));

        let whole = gaps.len() == 1 && gaps[0].is_equal_bounds(bounds);
        let gaps: Vec<Interval> = gaps
            .into_iter()
            .map(|gap| {
                let kind = if whole {
                    SpanKind::GapWhole
                } else if gap.st() == bounds.st() {
                    SpanKind::GapLeft
                } else if gap.en() == bounds.en() {
                    SpanKind::GapRight
                } else {
                    SpanKind::GapInner
                };
                gap.with_kind(kind)
            })
            .collect();

        log::debug!("{} occupied, {} gaps within {bounds}", self.len(), gaps.len());
        Intervals::new(self.iter().cloned().chain(gaps))
    }

    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.iter().filter(|ti| ti.kind().is_gap()).count()
    }

    /// All gaps in order, whatever their kind.
    #[must_use]
    pub fn gaps(&self) -> Vec<&Interval> {
        self.iter().filter(|ti| ti.kind().is_gap()).collect()
    }

    #[must_use]
    pub fn gaps_inner(&self) -> Vec<&Interval> {
        self.iter().filter(|ti| ti.kind().is_gap_inner()).collect()
    }

    #[must_use]
    pub fn gap_left(&self) -> Option<&Interval> {
        self.iter().find(|ti| ti.kind().is_gap_left())
    }

    #[must_use]
    pub fn gap_right(&self) -> Option<&Interval> {
        self.iter().find(|ti| ti.kind().is_gap_right())
    }

    #[must_use]
    pub fn gap_whole(&self) -> Option<&Interval> {
        self.iter().find(|ti| ti.kind().is_gap_whole())
    }
}
