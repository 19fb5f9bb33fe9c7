use derive_more::IsVariant;

use crate::interval::Interval;
use crate::time::Time;

#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd, IsVariant)]
pub enum PointKind {
    Start,
    End,
}

/// A start or end boundary of the interval at position `idx` of some slice.
#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct TimePoint {
    pub t: Time,
    pub idx: usize,
    pub kind: PointKind,
}

impl TimePoint {
    pub const fn new(t: Time, idx: usize, kind: PointKind) -> Self {
        Self { t, idx, kind }
    }

    /// Interval this point belongs to in `tis`.
    #[must_use]
    pub fn owner<'a>(&self, tis: &[&'a Interval]) -> Option<&'a Interval> {
        tis.get(self.idx).copied()
    }
}

/// Both boundaries of every interval, ordered by time. Coincident points
/// keep slice order, starts before ends for the same interval.
#[must_use]
pub fn boundaries(tis: &[&Interval]) -> Vec<TimePoint> {
    let mut points: Vec<TimePoint> = tis
        .iter()
        .enumerate()
        .flat_map(|(idx, ti)| {
            [
                TimePoint::new(ti.st(), idx, PointKind::Start),
                TimePoint::new(ti.en(), idx, PointKind::End),
            ]
        })
        .collect();
    points.sort_by_key(|p| p.t);
    points
}

/// Merges time-ordered points sharing an instant into one group each.
#[must_use]
pub fn group_coincident(points: Vec<TimePoint>) -> Vec<(Time, Vec<TimePoint>)> {
    let mut groups: Vec<(Time, Vec<TimePoint>)> = Vec::new();
    for p in points {
        match groups.last_mut() {
            Some((t, group)) if *t == p.t => group.push(p),
            _ => groups.push((p.t, vec![p])),
        }
    }
    groups
}
