use std::borrow::Borrow;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::{Tz, UTC};
use derive_more::Display;

use crate::duration::Duration;
use crate::{Error, Result};

pub const LOCAL_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[must_use]
pub fn ymdhms<T: Borrow<Tz>>(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, tz: T) -> Time {
    Time::new(tz.borrow().with_ymd_and_hms(y, m, d, h, mi, s).single().unwrap())
}

/// An absolute instant tagged with a timezone. Equality and ordering
/// compare instants, so the same moment in two zones is equal.
#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Display, Ord, PartialOrd)]
#[display("{t}")]
pub struct Time {
    t: DateTime<Tz>,
}

/// Creation
impl Time {
    pub const fn new(t: DateTime<Tz>) -> Self {
        Self { t }
    }

    pub fn now_utc() -> Self {
        Self::new(Utc::now().with_timezone(&UTC))
    }

    pub fn zero(tz: Tz) -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH.with_timezone(&tz))
    }
}

/// String related functions
impl Time {
    /// From a local time.
    pub fn from_local(s: &str, tz: Tz) -> Result<Self> {
        Self::from_local_datetime_fmt(s, LOCAL_FMT, tz)
    }

    /// Take the naive datetime assumed to be in the given timezone, and
    /// attach the timezone to it.
    pub fn from_local_datetime(d: NaiveDateTime, tz: Tz) -> Result<Self> {
        let dt = tz.from_local_datetime(&d);
        let dt = dt.single().ok_or_else(|| {
            Error::IntervalParse(format!("no single representation for {d} in {tz}"))
        })?;
        Ok(Self::new(dt))
    }

    pub fn from_local_datetime_fmt(s: &str, fmt: &str, tz: Tz) -> Result<Self> {
        Self::from_local_datetime(NaiveDateTime::parse_from_str(s, fmt)?, tz)
    }

    /// Start of the given local day.
    pub fn from_local_date_fmt(s: &str, fmt: &str, tz: Tz) -> Result<Self> {
        let d = NaiveDate::parse_from_str(s, fmt)?;
        Self::from_local_datetime(d.and_time(NaiveTime::MIN), tz)
    }

    /// Parses under `fmt`. If the layout carries an offset (`%z` and
    /// friends) the offset in the text wins, otherwise the text is read as
    /// local time in `tz`. Date-only layouts give the start of the day.
    pub fn parse(s: &str, fmt: &str, tz: Tz) -> Result<Self> {
        if let Ok(t) = DateTime::parse_from_str(s, fmt) {
            return Ok(Self::new(t.with_timezone(&tz)));
        }
        Self::from_local_datetime_fmt(s, fmt, tz)
            .or_else(|e| Self::from_local_date_fmt(s, fmt, tz).map_err(|_| e))
    }

    #[must_use]
    pub fn to_iso(&self) -> String {
        self.t.to_rfc3339()
    }

    #[must_use]
    pub fn to_local(&self) -> String {
        self.t.format(LOCAL_FMT).to_string()
    }

    #[must_use]
    pub fn format(&self, f: &str) -> String {
        self.t.format(f).to_string()
    }
}

/// Accessors and conversions
impl Time {
    #[must_use]
    pub fn tz(&self) -> Tz {
        self.t.timezone()
    }

    pub fn with_tz(&self, tz: Tz) -> Self {
        self.t.with_timezone(&tz).into()
    }

    pub fn utc(&self) -> Self {
        self.with_tz(UTC)
    }

    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.tz() == UTC
    }
}

/// Checked arithmetic, `None` when the result leaves chrono's range.
impl Time {
    #[must_use]
    pub fn checked_add(&self, d: Duration) -> Option<Self> {
        self.t.checked_add_signed(d.to_delta()).map(Self::new)
    }

    #[must_use]
    pub fn checked_sub(&self, d: Duration) -> Option<Self> {
        self.t.checked_sub_signed(d.to_delta()).map(Self::new)
    }
}

impl Default for Time {
    fn default() -> Self {
        Time::zero(UTC)
    }
}

impl From<DateTime<Tz>> for Time {
    fn from(v: DateTime<Tz>) -> Self {
        Self::new(v)
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(v: DateTime<Utc>) -> Self {
        Self::new(v.with_timezone(&UTC))
    }
}

impl From<Time> for DateTime<Tz> {
    fn from(v: Time) -> Self {
        v.t
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    fn sub(self, t: Time) -> Self::Output {
        Duration::from_delta(self.t.signed_duration_since(t.t))
    }
}

impl Sub<Duration> for Time {
    type Output = Time;

    fn sub(self, d: Duration) -> Self::Output {
        Self::new(self.t - d.to_delta())
    }
}

impl SubAssign<Duration> for Time {
    fn sub_assign(&mut self, d: Duration) {
        *self = *self - d;
    }
}

impl Add<Duration> for Time {
    type Output = Time;

    fn add(self, d: Duration) -> Self::Output {
        Self::new(self.t + d.to_delta())
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, d: Duration) {
        *self = *self + d;
    }
}
