use chrono_tz::Tz;
use strum::{Display as StrumDisplay, EnumString};

use crate::duration::Duration;
use crate::kind::SpanKind;
use crate::time::Time;
use crate::{Error, Result};

pub mod exclude;
pub mod relation;
pub mod split;

/// How the samples of an interval are laid out.
#[must_use]
#[derive(Debug, Default, Eq, PartialEq, Hash, Copy, Clone, StrumDisplay, EnumString)]
pub enum DtMode {
    /// A sample every `dt`.
    #[default]
    #[strum(serialize = "")]
    Homogeneous,
    /// The explicit sample list is authoritative, `dt` is informational.
    #[strum(serialize = "DISCRETE")]
    Discrete,
}

/// A closed span of time `[st, en]` with optional sampling metadata.
///
/// Equality (`==`) compares `st`, `en`, `dt` and the mode. The name, the
/// sample list and the gap classification are metadata and do not take
/// part in it.
#[must_use]
#[derive(Debug, Clone)]
pub struct Interval {
    st: Time,
    en: Time,
    dt: Duration,
    mode: DtMode,
    times: Vec<Time>,
    name: String,
    kind: SpanKind,
}

/// Creation
impl Interval {
    pub fn new(st: impl Into<Time>, en: impl Into<Time>) -> Result<Self> {
        let (st, en) = (st.into(), en.into());
        check_bounds(st, en)?;
        Ok(Self::from_parts(st, en, Duration::zero()))
    }

    /// Interval whose samples are exactly `times`. The list is kept sorted.
    pub fn discrete(st: impl Into<Time>, en: impl Into<Time>, times: Vec<Time>) -> Result<Self> {
        let mut ti = Self::new(st, en)?;
        ti.mode = DtMode::Discrete;
        ti.times = times;
        ti.times.sort();
        Ok(ti)
    }

    pub fn with_dt(mut self, dt: Duration) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub(crate) fn with_kind(mut self, kind: SpanKind) -> Self {
        self.kind = kind;
        self
    }

    fn from_parts(st: Time, en: Time, dt: Duration) -> Self {
        Self {
            st,
            en,
            dt,
            mode: DtMode::Homogeneous,
            times: Vec::new(),
            name: String::new(),
            kind: SpanKind::Occupied,
        }
    }

    /// Copy of the sampling data only: bounds, `dt`, mode and sample times.
    /// Name and classification are dropped.
    pub fn clone_min(&self) -> Self {
        Self {
            times: self.times.clone(),
            mode: self.mode,
            ..Self::from_parts(self.st, self.en, self.dt)
        }
    }

    /// Minimal copy with new bounds. Callers guarantee `st <= en`.
    pub(crate) fn fragment(&self, st: Time, en: Time) -> Self {
        debug_assert!(st <= en, "fragment end {en} before start {st}");
        Self { st, en, ..self.clone_min() }
    }
}

/// Accessors
impl Interval {
    pub fn st(&self) -> Time {
        self.st
    }

    pub fn en(&self) -> Time {
        self.en
    }

    pub fn dt(&self) -> Duration {
        self.dt
    }

    pub fn mode(&self) -> DtMode {
        self.mode
    }

    #[must_use]
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn len(&self) -> Duration {
        self.en - self.st
    }

    /// Whether this is a degenerate, zero-length interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.st == self.en
    }

    /// Length as `"  5d  3h 04m"`.
    #[must_use]
    pub fn len_human(&self) -> String {
        let len = self.len().to_delta();
        let days = len.num_days();
        let hours = len.num_hours() - days * 24;
        let mins = len.num_minutes() - len.num_hours() * 60;
        format!("{days:3}d {hours:2}h {mins:02}m")
    }
}

/// Mutation. Setters re-validate `st <= en`.
impl Interval {
    pub fn set_st(&mut self, t: impl Into<Time>) -> Result<()> {
        let t = t.into();
        check_bounds(t, self.en)?;
        self.st = t;
        Ok(())
    }

    pub fn set_en(&mut self, t: impl Into<Time>) -> Result<()> {
        let t = t.into();
        check_bounds(self.st, t)?;
        self.en = t;
        Ok(())
    }

    pub fn set_bounds(&mut self, st: impl Into<Time>, en: impl Into<Time>) -> Result<()> {
        let (st, en) = (st.into(), en.into());
        check_bounds(st, en)?;
        self.st = st;
        self.en = en;
        Ok(())
    }

    pub fn set_dt(&mut self, dt: Duration) {
        self.dt = dt;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Moves every instant into `tz`. Instants themselves do not change.
    pub fn set_tz(&mut self, tz: Tz) {
        self.st = self.st.with_tz(tz);
        self.en = self.en.with_tz(tz);
        for t in &mut self.times {
            *t = t.with_tz(tz);
        }
    }

    pub fn to_utc(&mut self) {
        self.set_tz(chrono_tz::UTC);
    }
}

fn check_bounds(st: Time, en: Time) -> Result<()> {
    if en < st {
        return Err(Error::InvalidSpan { st: st.to_string(), en: en.to_string() });
    }
    Ok(())
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for Interval {}

#[cfg(test)]
mod tests {
    use chrono_tz::US::Pacific;
    use chrono_tz::UTC;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::time::ymdhms;

    fn t0() -> Time {
        ymdhms(2015, 3, 15, 12, 0, 0, UTC)
    }

    #[test]
    fn construction_checks_order() -> Result<()> {
        let ti = Interval::new(t0(), t0() + Duration::HOUR)?;
        assert_eq!(ti.len(), Duration::HOUR);
        assert!(!ti.is_empty());
        assert!(Interval::new(t0(), t0())?.is_empty());
        assert!(matches!(
            Interval::new(t0(), t0() - Duration::SEC),
            Err(Error::InvalidSpan { .. })
        ));
        Ok(())
    }

    #[test]
    fn setters_revalidate() -> Result<()> {
        let mut ti = Interval::new(t0(), t0() + Duration::HOUR)?;
        assert!(ti.set_st(t0() + Duration::DAY).is_err());
        assert_eq!(ti.st(), t0());
        assert!(ti.set_en(t0() - Duration::MIN).is_err());
        assert_eq!(ti.en(), t0() + Duration::HOUR);

        ti.set_en(t0() + Duration::DAY)?;
        ti.set_st(t0() + Duration::HOUR)?;
        assert_eq!(ti.len(), Duration::from_hours(23));

        assert!(ti.set_bounds(t0() + Duration::DAY, t0()).is_err());
        ti.set_bounds(t0(), t0())?;
        assert!(ti.is_empty());
        Ok(())
    }

    #[test]
    fn clones_are_deep() -> Result<()> {
        let times = vec![t0() + Duration::from_mins(20), t0() + Duration::from_mins(5)];
        let ti = Interval::discrete(t0(), t0() + Duration::HOUR, times)?
            .with_name("One")
            .with_dt(Duration::from_mins(5));
        assert_eq!(ti.mode(), DtMode::Discrete);
        assert_eq!(ti.times()[0], t0() + Duration::from_mins(5));

        let mut cloned = ti.clone();
        cloned.set_tz(Pacific);
        cloned.set_name("Two");
        assert_eq!(ti.name(), "One");
        assert!(ti.times().iter().all(Time::is_utc));
        assert!(cloned.times().iter().all(|t| !t.is_utc()));

        let min = ti.clone_min();
        assert_eq!(min.name(), "");
        assert_eq!(min.times(), ti.times());
        assert_eq!(min, ti);
        Ok(())
    }

    #[test]
    fn to_utc_normalizes_all_instants() -> Result<()> {
        let st = ymdhms(2014, 12, 14, 20, 0, 0, Pacific);
        let mut ti = Interval::discrete(st, st + Duration::DAY, vec![st + Duration::HOUR])?;
        ti.to_utc();
        assert!(ti.st().is_utc());
        assert!(ti.en().is_utc());
        assert!(ti.times()[0].is_utc());
        assert_eq!(ti.st(), ymdhms(2014, 12, 15, 4, 0, 0, UTC));
        Ok(())
    }

    #[test]
    fn len_human() -> Result<()> {
        let len = 5 * Duration::DAY + 3 * Duration::HOUR + 4 * Duration::MIN;
        let ti = Interval::new(t0(), t0() + len)?;
        assert_eq!(ti.len_human(), "  5d  3h 04m");
        let ti = Interval::new(t0(), t0() + Duration::from_mins(45))?;
        assert_eq!(ti.len_human(), "  0d  0h 45m");
        Ok(())
    }

    #[test]
    fn mode_text() -> Result<()> {
        assert_eq!(DtMode::Discrete.to_string(), "DISCRETE");
        assert_eq!(DtMode::Homogeneous.to_string(), "");
        assert_eq!("DISCRETE".parse::<DtMode>()?, DtMode::Discrete);
        assert_eq!("".parse::<DtMode>()?, DtMode::Homogeneous);
        Ok(())
    }
}
