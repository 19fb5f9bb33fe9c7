use std::fmt;
use std::ops::Index;

use crate::interval::Interval;
use crate::render::{DumpConfig, render};

/// Sequence of intervals sorted by start, each tagged with a positional
/// index. Duplicates and overlaps are allowed.
///
/// Construction is the only normalization point: every member is moved to
/// UTC, stable-sorted by start and indexed `0..n`. Operations that change
/// membership build a new collection the same way. The sort views keep the
/// indices assigned at construction.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Intervals {
    data: Vec<Interval>,
    idx: Vec<usize>,
}

impl Intervals {
    pub fn new(tis: impl IntoIterator<Item = Interval>) -> Self {
        let mut data: Vec<Interval> = tis.into_iter().collect();
        for ti in &mut data {
            ti.to_utc();
        }
        // Stable sort since may contain duplicate start values.
        data.sort_by_key(Interval::st);
        let idx = (0..data.len()).collect();
        log::debug!("indexed {} intervals", data.len());
        Self { data, idx }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.data.iter()
    }

    /// Pairs of (positional index, interval) in current order.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Interval)> {
        self.idx.iter().copied().zip(&self.data)
    }

    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&Interval> {
        self.data.get(pos)
    }

    /// Positional index of the element currently at `pos`.
    #[must_use]
    pub fn index_of(&self, pos: usize) -> Option<usize> {
        self.idx.get(pos).copied()
    }

    /// Finds an interval by its positional index. Sort views reorder
    /// elements without renumbering, so this scans.
    #[must_use]
    pub fn find(&self, idx: usize) -> Option<&Interval> {
        self.indexed().find(|&(i, _)| i == idx).map(|(_, ti)| ti)
    }

    /// Re-sorted by start, keeping positional indices.
    pub fn sorted_by_st(&self) -> Self {
        self.sorted_by(Interval::st)
    }

    /// Re-sorted by end, keeping positional indices.
    pub fn sorted_by_en(&self) -> Self {
        self.sorted_by(Interval::en)
    }

    fn sorted_by<K: Ord>(&self, key: impl Fn(&Interval) -> K) -> Self {
        let mut pairs: Vec<_> = self.idx.iter().copied().zip(self.data.iter().cloned()).collect();
        pairs.sort_by_key(|(_, ti)| key(ti));
        let (idx, data) = pairs.into_iter().unzip();
        Self { data, idx }
    }

    /// New collection with `ti` added, re-sorted and re-indexed.
    pub fn add(&self, ti: Interval) -> Self {
        Self::new(self.data.iter().cloned().chain(std::iter::once(ti)))
    }

    /// Excludes `excl` from every member. Zero-length remainders are
    /// dropped. The result is not re-indexed; build a collection from it
    /// when indices matter.
    #[must_use]
    pub fn exclude(&self, excl: &Interval) -> Vec<Interval> {
        exclude_each(&self.data, excl)
    }

    /// Moves every member to UTC in place.
    pub fn utc(&mut self) {
        for ti in &mut self.data {
            ti.to_utc();
        }
    }

    /// Same length and pairwise full equality.
    #[must_use]
    pub fn is_equal(&self, other: &Intervals) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.is_equal(b))
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Interval> {
        self.data
    }

    /// Multi-track rendering, see [`render`].
    #[must_use]
    pub fn render(&self, cfg: &DumpConfig) -> String {
        let refs: Vec<&Interval> = self.data.iter().collect();
        render(&refs, cfg)
    }

    /// One row per element: position, index, bounds and classification.
    #[must_use]
    pub fn dump(&self, cfg: &DumpConfig) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for (pos, (idx, ti)) in self.indexed().enumerate() {
            let _ = writeln!(
                out,
                "{pos} : idx = {idx} : {} --- {} : {}",
                ti.st().format(&cfg.layout),
                ti.en().format(&cfg.layout),
                ti.kind()
            );
        }
        out
    }
}

pub(crate) fn exclude_each(tis: &[Interval], excl: &Interval) -> Vec<Interval> {
    tis.iter().flat_map(|ti| ti.exclude(excl)).filter(|rem| !rem.is_empty()).collect()
}

impl Index<usize> for Intervals {
    type Output = Interval;

    fn index(&self, pos: usize) -> &Self::Output {
        &self.data[pos]
    }
}

impl FromIterator<Interval> for Intervals {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Intervals {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Intervals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&DumpConfig::default()))
    }
}
