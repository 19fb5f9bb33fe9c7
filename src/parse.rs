//! Textual interval notation: `"<st> --- <en>"`, optionally followed by
//! `" @ <dt>"` in short-unit form (`15m`, `7h`, `30d`).

use chrono_tz::{Tz, UTC};

use crate::duration::Duration;
use crate::interval::Interval;
use crate::seq::intervals::Intervals;
use crate::time::Time;
use crate::{Error, Result};

pub const SEPARATOR: &str = " --- ";
pub const DT_SEPARATOR: &str = " @ ";

/// Parses one interval, reading bounds under `layout`. Bounds without an
/// offset are taken as UTC.
pub fn parse_interval(layout: &str, s: &str) -> Result<Interval> {
    parse_interval_tz(layout, s, UTC)
}

/// As [`parse_interval`], reading offset-less bounds as local time in `tz`.
pub fn parse_interval_tz(layout: &str, s: &str, tz: Tz) -> Result<Interval> {
    let (span, dt) = if s.contains('@') {
        let (span, dt) = s.rsplit_once(DT_SEPARATOR).ok_or_else(|| {
            Error::IntervalParse(format!("expected '{DT_SEPARATOR}<dt>' in '{s}'"))
        })?;
        (span, Duration::from_human(dt)?)
    } else {
        (s, Duration::zero())
    };

    let bounds: Vec<&str> = span.split(SEPARATOR).collect();
    let [st, en] = bounds.as_slice() else {
        return Err(Error::IntervalParse(format!("expected 'st{SEPARATOR}en', got '{s}'")));
    };
    let st = Time::parse(st.trim(), layout, tz)?;
    let en = Time::parse(en.trim(), layout, tz)?;
    if st >= en {
        return Err(Error::IntervalParse(format!("start {st} is not before end {en} in '{s}'")));
    }

    Ok(Interval::new(st, en)?.with_dt(dt))
}

/// Parses every entry or none. The first failure is reported with its
/// position.
pub fn parse_intervals<S: AsRef<str>>(
    layout: &str,
    strs: impl IntoIterator<Item = S>,
) -> Result<Vec<Interval>> {
    strs.into_iter()
        .enumerate()
        .map(|(pos, s)| {
            parse_interval(layout, s.as_ref())
                .map_err(|e| Error::Batch { pos, source: Box::new(e) })
        })
        .collect()
}

pub fn parse_collection<S: AsRef<str>>(
    layout: &str,
    strs: impl IntoIterator<Item = S>,
) -> Result<Intervals> {
    Ok(Intervals::new(parse_intervals(layout, strs)?))
}
