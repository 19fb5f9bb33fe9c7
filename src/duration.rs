use std::fmt::Write;
use std::sync::LazyLock;

use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use chrono::TimeDelta;
use derive_more::Display;
use num_traits::ToPrimitive;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{Error, Result};

const BASES: &[(&str, Duration)] = &[
    ("w", Duration::WEEK),
    ("d", Duration::DAY),
    ("h", Duration::HOUR),
    ("m", Duration::MIN),
    ("s", Duration::SEC),
    ("ms", Duration::MSEC),
    ("us", Duration::USEC),
    ("ns", Duration::NSEC),
];

/// Exact span of time in seconds. Sub-nanosecond precision is kept in
/// arithmetic but dropped when applied to a `Time`.
#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Display, Ord, PartialOrd)]
#[display("{}", self.human())]
pub struct Duration {
    secs: Decimal,
}

impl Duration {
    pub const NSEC: Duration = Duration::new(dec!(0.000000001));
    pub const USEC: Duration = Duration::new(dec!(0.000001));
    pub const MSEC: Duration = Duration::new(dec!(0.001));
    pub const SEC: Duration = Duration::new(dec!(1));
    pub const MIN: Duration = Duration::new(dec!(60));
    pub const HOUR: Duration = Duration::new(dec!(3600));
    pub const DAY: Duration = Duration::new(dec!(86400));
    pub const WEEK: Duration = Duration::new(dec!(604800));

    pub const fn new(secs: Decimal) -> Self {
        Self { secs }
    }

    pub const fn zero() -> Self {
        Self { secs: dec!(0) }
    }

    pub fn from_secs(secs: i64) -> Self {
        Self::new(Decimal::new(secs, 0))
    }

    pub fn from_mins(mins: i64) -> Self {
        Self::MIN * mins
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::HOUR * hours
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.secs.is_zero()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.secs > Decimal::ZERO
    }

    #[must_use]
    pub const fn secs(&self) -> Decimal {
        self.secs
    }

    pub fn abs(&self) -> Self {
        Self::new(self.secs.abs())
    }

    pub fn from_delta(d: TimeDelta) -> Self {
        Self::new(Decimal::new(d.num_seconds(), 0) + Decimal::new(i64::from(d.subsec_nanos()), 9))
    }

    /// Converts to a chrono delta, saturating at the representable range.
    #[must_use]
    pub fn to_delta(&self) -> TimeDelta {
        let saturated = if self.secs.is_sign_negative() { TimeDelta::MIN } else { TimeDelta::MAX };
        let secs = self.secs.trunc();
        let nanos = ((self.secs - secs) * dec!(1000000000)).trunc();
        let Some(whole) = secs.to_i64().and_then(TimeDelta::try_seconds) else {
            return saturated;
        };
        let frac = TimeDelta::nanoseconds(nanos.to_i64().unwrap_or(0));
        whole.checked_add(&frac).unwrap_or(saturated)
    }

    /// Short-unit rendering, e.g. `1h30m`. Zero renders as `0s`.
    #[must_use]
    pub fn human(&self) -> String {
        if self.is_zero() {
            return "0s".to_owned();
        }
        let mut human = String::new();
        if self.secs.is_sign_negative() {
            human.push('-');
        }
        let mut rem = self.abs();
        for &(s, dur) in BASES {
            let div = (rem / dur).trunc();
            rem -= dur * div;
            if !div.is_zero() {
                let _ = write!(human, "{div}{s}");
            }
        }
        // Some sub-nanosecond duration...
        if !rem.is_zero() {
            let _ = write!(human, "...");
        }
        human
    }

    /// Parses short-unit text such as `15m`, `7h`, `30d` or `1h30m`.
    pub fn from_human(s: &str) -> Result<Duration> {
        static WHOLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+[a-z]+)+$").unwrap());
        static PART: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)([a-z]+)").unwrap());

        let s = s.trim();
        if !WHOLE.is_match(s) {
            return Err(Error::DurationParse(format!("malformed duration '{s}'")));
        }
        let mut dur = Duration::zero();
        for caps in PART.captures_iter(s) {
            let count = caps[1].parse::<i64>()?;
            let ident = &caps[2];
            let base = BASES.iter().find(|v| v.0 == ident).ok_or_else(|| {
                Error::DurationParse(format!("unknown duration unit '{ident}' in '{s}'"))
            })?;
            dur += base.1 * count;
        }
        Ok(dur)
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl_op_ex!(+ |a: &Duration, b: &Duration| -> Duration { Duration::new(a.secs + b.secs) });
impl_op_ex!(+= |a: &mut Duration, b: &Duration| { a.secs += b.secs });

impl_op_ex!(-|a: &Duration, b: &Duration| -> Duration { Duration::new(a.secs - b.secs) });
impl_op_ex!(-= |a: &mut Duration, b: &Duration| { a.secs -= b.secs });

// dur / dur = ratio
impl_op_ex!(/ |a: &Duration, b: &Duration| -> Decimal { a.secs / b.secs });

impl_op_ex_commutative!(*|a: &Duration, b: &i64| -> Duration {
    Duration::new(a.secs * Decimal::from(*b))
});
impl_op_ex_commutative!(*|a: &Duration, b: &Decimal| -> Duration { Duration::new(a.secs * b) });
impl_op_ex!(/ |a: &Duration, b: &i64| -> Duration { Duration::new(a.secs / Decimal::from(*b)) });
