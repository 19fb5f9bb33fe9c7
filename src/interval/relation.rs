//! Pairwise relations between intervals. Touching boundaries count as
//! before/after/adjacent and never as overlap.

use crate::interval::Interval;

/// Equality
impl Interval {
    /// Full equality: bounds, `dt` and mode.
    #[must_use]
    pub fn is_equal(&self, other: &Interval) -> bool {
        self.is_equal_bounds_dt(other) && self.mode() == other.mode()
    }

    #[must_use]
    pub fn is_equal_bounds(&self, other: &Interval) -> bool {
        self.st() == other.st() && self.en() == other.en()
    }

    #[must_use]
    pub fn is_equal_bounds_dt(&self, other: &Interval) -> bool {
        self.dt() == other.dt() && self.is_equal_bounds(other)
    }
}

/// Position
impl Interval {
    /// Other lies fully inside this one.
    ///     [   this   ]
    ///       [other]
    #[must_use]
    pub fn contains(&self, other: &Interval) -> bool {
        other.st() >= self.st() && other.en() <= self.en()
    }

    /// This lies fully inside other.
    ///     [  other   ]
    ///       [this]
    #[must_use]
    pub fn contained_by(&self, other: &Interval) -> bool {
        other.contains(self)
    }

    /// This ends at or before the start of other.
    ///     [ this ]
    ///              [ other ]
    #[must_use]
    pub fn before(&self, other: &Interval) -> bool {
        other.st() >= self.en()
    }

    /// This starts at or after the end of other.
    ///              [ this ]
    ///     [ other ]
    #[must_use]
    pub fn after(&self, other: &Interval) -> bool {
        self.st() >= other.en()
    }

    #[must_use]
    pub fn starts_before(&self, other: &Interval) -> bool {
        other.st() >= self.st()
    }

    #[must_use]
    pub fn starts_after(&self, other: &Interval) -> bool {
        self.after(other)
    }

    /// Start of this lies within `[other.st, other.en]`.
    ///         [   this   ]
    ///     [ other ]
    #[must_use]
    pub fn starts_inside(&self, other: &Interval) -> bool {
        self.st() >= other.st() && self.st() <= other.en()
    }

    /// End of this lies within `[other.st, other.en]`.
    ///     [   this   ]
    ///            [ other ]
    #[must_use]
    pub fn ends_inside(&self, other: &Interval) -> bool {
        self.en() >= other.st() && self.en() <= other.en()
    }

    #[must_use]
    pub fn left_adjacent(&self, other: &Interval) -> bool {
        self.en() == other.st()
    }

    #[must_use]
    pub fn right_adjacent(&self, other: &Interval) -> bool {
        other.en() == self.st()
    }

    /// Shares some time with other beyond a touching boundary.
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.before(other) && !self.after(other)
    }
}

#[cfg(test)]
mod tests {
    use chrono_tz::UTC;
    use proptest::prelude::*;

    use super::*;
    use crate::duration::Duration;
    use crate::time::{Time, ymdhms};

    fn t0() -> Time {
        ymdhms(2015, 3, 15, 12, 0, 0, UTC)
    }

    fn ti(st_h: i64, en_h: i64) -> Interval {
        Interval::new(t0() + Duration::from_hours(st_h), t0() + Duration::from_hours(en_h)).unwrap()
    }

    #[test]
    fn equality() {
        let a = ti(-4, 4).with_dt(Duration::from_mins(30)).with_name("One");
        let b = ti(-4, 4).with_dt(Duration::from_mins(30)).with_name("Two");
        let c = ti(-4, 4).with_dt(Duration::from_mins(15));
        assert!(a.is_equal(&b));
        assert_eq!(a, b);
        assert!(!a.is_equal(&c));
        assert!(a.is_equal_bounds(&c));
        assert!(!a.is_equal_bounds_dt(&c));

        let d = Interval::discrete(a.st(), a.en(), vec![]).unwrap().with_dt(a.dt());
        assert!(a.is_equal_bounds_dt(&d));
        assert!(!a.is_equal(&d));
    }

    #[test]
    fn containment() {
        let outer = ti(-8, 8);
        let inner = ti(-5, -4);
        assert!(outer.contains(&inner));
        assert!(inner.contained_by(&outer));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
        assert!(outer.contains(&ti(-8, -8)));
        assert!(!outer.contains(&ti(-9, 0)));
    }

    #[test]
    fn ordering_and_adjacency() {
        let a = ti(0, 2);
        let b = ti(2, 4);
        let c = ti(1, 3);

        assert!(a.before(&b));
        assert!(b.after(&a));
        assert!(a.left_adjacent(&b));
        assert!(b.right_adjacent(&a));
        assert!(!a.overlaps(&b));

        assert!(!a.before(&c));
        assert!(!c.after(&a));
        assert!(a.overlaps(&c));
        assert!(c.starts_inside(&a));
        assert!(a.ends_inside(&c));
        assert!(!a.starts_inside(&c));
        assert!(a.starts_before(&c));
        assert!(!c.starts_before(&a));
        assert!(b.starts_after(&a));
    }

    #[test]
    fn boundaries_are_inclusive() {
        let a = ti(0, 2);
        assert!(ti(2, 3).starts_inside(&a));
        assert!(ti(-1, 0).ends_inside(&a));
        assert!(!ti(3, 4).starts_inside(&a));
    }

    fn arb_interval() -> impl Strategy<Value = Interval> {
        (-100i64..100, 0i64..50).prop_map(|(st, len)| {
            let st = t0() + Duration::from_mins(st);
            Interval::new(st, st + Duration::from_mins(len)).unwrap()
        })
    }

    proptest! {
        #[test]
        fn contains_is_inverse_of_contained_by(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.contains(&b), b.contained_by(&a));
        }

        #[test]
        fn before_after_antisymmetric(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.before(&b), b.after(&a));
            if a.before(&b) || a.after(&b) {
                prop_assert!(!a.overlaps(&b));
            }
            if !a.is_empty() && !b.is_empty() && a.before(&b) {
                prop_assert!(!a.after(&b));
            }
        }
    }
}
