use crate::interval::Interval;
use crate::time::Time;

impl Interval {
    /// Keeps what lies right of `t`. A `t` at or outside the bounds leaves
    /// the interval untouched.
    ///     [     this     ]
    ///     ----|------------->
    ///         t
    ///         [  result  ]
    pub fn trim_left(&self, t: Time) -> Interval {
        if t <= self.st() || t >= self.en() {
            return self.clone();
        }
        self.fragment(t, self.en())
    }

    /// Keeps what lies left of `t`. A `t` at or outside the bounds leaves
    /// the interval untouched.
    ///     [     this     ]
    ///     ---------|-------->
    ///              t
    ///     [ result ]
    pub fn trim_right(&self, t: Time) -> Interval {
        if t <= self.st() || t >= self.en() {
            return self.clone();
        }
        self.fragment(self.st(), t)
    }

    /// `self \ other` as at most two fragments. Fragments carry the sampling
    /// data of `self` but no name. Zero-length fragments can come out of
    /// degenerate inputs; collection-level exclusion drops them.
    #[must_use]
    pub fn exclude(&self, other: &Interval) -> Vec<Interval> {
        if other.before(self) || other.after(self) {
            return vec![self.clone_min()];
        }

        if self.contained_by(other) {
            return Vec::new();
        }

        if self.contains(other) {
            let left = self.fragment(self.st(), other.st());
            let right = self.fragment(other.en(), self.en());
            return if self.st() == other.st() {
                vec![right]
            } else if self.en() == other.en() {
                vec![left]
            } else {
                vec![left, right]
            };
        }

        // Ends inside is checked first: other covers the head of self.
        if other.ends_inside(self) {
            return vec![self.fragment(other.en(), self.en())];
        }

        if other.starts_inside(self) {
            return vec![self.fragment(self.st(), other.st())];
        }

        Vec::new()
    }
}
