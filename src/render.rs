use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::interval::{DtMode, Interval};
use crate::point::{boundaries, group_coincident};

pub const DEBUG_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Returned by [`render`] instead of tracks when two positions share one
/// interval.
pub const ALIASED: &str =
    "WARNING: cannot render, the same interval appears at more than one position";

/// Settings for debug output. Loadable from any serde format; missing
/// fields take their defaults.
#[must_use]
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// strftime layout for bounds.
    pub layout: String,
}

impl DumpConfig {
    pub fn new(layout: impl Into<String>) -> Self {
        Self { layout: layout.into() }
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self::new(DEBUG_LAYOUT)
    }
}

impl Interval {
    /// `[st --- en] dt = .. len = ..` in UTC, then the mode when discrete
    /// and the name when set.
    #[must_use]
    pub fn dump_line(&self, cfg: &DumpConfig) -> String {
        let mut out = format!(
            "[{} --- {}] dt = {} len = {}",
            self.st().utc().format(&cfg.layout),
            self.en().utc().format(&cfg.layout),
            self.dt(),
            self.len()
        );
        if self.mode() == DtMode::Discrete {
            let _ = write!(out, ", dtMode = {}", self.mode());
        }
        if !self.name().is_empty() {
            let _ = write!(out, ", {}", self.name());
        }
        out
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dump_line(&DumpConfig::default()))
    }
}

/// Draws one track per interval, sorted by start, against a shared time
/// axis made of the distinct boundary instants:
///
/// ```text
/// 0 : [___]   : [.. --- ..] dt = 0s len = 2h, A
/// 1 :   [___] : [.. --- ..] dt = 0s len = 2h, B
/// ```
///
/// Each instant takes one column on a track it bounds and two on the
/// others; spans are filled by [`SpanKind::fill`](crate::kind::SpanKind::fill).
/// A zero-length interval is drawn as `[]` in the column pair of its instant.
/// If the same interval is referenced twice, [`ALIASED`] is returned.
#[must_use]
pub fn render(tis: &[&Interval], cfg: &DumpConfig) -> String {
    if has_aliases(tis) {
        log::warn!("refusing to render {} intervals with aliased entries", tis.len());
        return ALIASED.to_owned();
    }

    let mut tis = tis.to_vec();
    tis.sort_by_key(|ti| ti.st());

    let groups = group_coincident(boundaries(&tis));
    let mut tracks = vec![String::new(); tis.len()];
    for (g, (t, points)) in groups.iter().enumerate() {
        for p in points {
            tracks[p.idx].push(if p.kind.is_start() { '[' } else { ']' });
        }
        let misses = (0..tis.len()).filter(|&idx| points.iter().all(|p| p.idx != idx));

        let Some((next, _)) = groups.get(g + 1) else {
            for idx in misses {
                tracks[idx].push(' ');
            }
            break;
        };

        for p in points {
            // Both brackets of a zero-length interval already fill the pair.
            let Some(ti) = p.owner(&tis).filter(|ti| !ti.is_empty()) else { continue };
            tracks[p.idx].push(if *next > ti.en() { ' ' } else { ti.kind().fill() });
        }
        for idx in misses {
            let ti = tis[idx];
            let c = if *t < ti.st() || *next > ti.en() { ' ' } else { ti.kind().fill() };
            tracks[idx].push(c);
            tracks[idx].push(c);
        }
    }

    let width = tis.len().to_string().len();
    let cols = tracks.iter().map(String::len).max().unwrap_or(0);
    let mut out = String::new();
    for (i, (track, ti)) in tracks.iter().zip(&tis).enumerate() {
        let _ = writeln!(out, "{i:>width$} : {track:<cols$} : {}", ti.dump_line(cfg));
    }
    out
}

fn has_aliases(tis: &[&Interval]) -> bool {
    tis.iter()
        .enumerate()
        .any(|(i, a)| tis[i + 1..].iter().any(|b| std::ptr::eq(*a, *b)))
}

#[cfg(test)]
mod tests {
    use chrono_tz::US::Pacific;
    use chrono_tz::UTC;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::duration::Duration;
    use crate::seq::intervals::Intervals;
    use crate::time::{Time, ymdhms};

    fn h(n: i64) -> Time {
        ymdhms(2015, 3, 15, 12, 0, 0, UTC) + Duration::from_hours(n)
    }

    fn ti(st_h: i64, en_h: i64, name: &str) -> Interval {
        Interval::new(h(st_h), h(en_h)).unwrap().with_name(name)
    }

    fn tracks(out: &str) -> Vec<&str> {
        out.lines().map(|l| l.split(" : ").nth(1).unwrap_or_default()).collect()
    }

    #[test]
    fn dump_line() {
        let cfg = DumpConfig::new("%H:%M");
        let a = ti(0, 2, "").with_dt(Duration::from_mins(15));
        assert_eq!(a.dump_line(&cfg), "[12:00 --- 14:00] dt = 15m len = 2h");

        let st = ymdhms(2015, 3, 15, 5, 0, 0, Pacific);
        let b = Interval::discrete(st, st + Duration::HOUR, vec![st]).unwrap().with_name("B");
        assert_eq!(b.dump_line(&cfg), "[12:00 --- 13:00] dt = 0s len = 1h, dtMode = DISCRETE, B");
        assert_eq!(
            b.to_string(),
            "[2015-03-15 12:00:00 UTC --- 2015-03-15 13:00:00 UTC] dt = 0s len = 1h, \
             dtMode = DISCRETE, B"
        );
    }

    #[test]
    fn config_from_json() -> crate::Result<()> {
        let cfg: DumpConfig =
            serde_json::from_str(r#"{"layout": "%H:%M"}"#).map_err(crate::Error::custom)?;
        assert_eq!(cfg, DumpConfig::new("%H:%M"));
        let cfg: DumpConfig = serde_json::from_str("{}").map_err(crate::Error::custom)?;
        assert_eq!(cfg, DumpConfig::default());
        Ok(())
    }

    #[test]
    fn overlapping_tracks() {
        let a = ti(0, 2, "A");
        let b = ti(1, 3, "B");
        let out = render(&[&b, &a], &DumpConfig::new("%H"));
        assert_eq!(tracks(&out), vec!["[___]  ", "  [___]"]);
        assert!(out.starts_with("0 : [___]   : [12 --- 14] dt = 0s len = 2h, A\n"));
    }

    #[test]
    fn adjacent_tracks_share_a_column() {
        let a = ti(0, 2, "A");
        let b = ti(2, 3, "B");
        let out = render(&[&a, &b], &DumpConfig::default());
        assert_eq!(tracks(&out), vec!["[_]  ", "  [_]"]);
    }

    #[test]
    fn gap_fills() {
        let res = Intervals::new([ti(-5, -4, "A")]).analyze_relative_to(&ti(-8, 8, ""));
        let out = res.render(&DumpConfig::default());
        assert_eq!(tracks(&out), vec!["[<]    ", "  [_]  ", "    [>]"]);
        assert_eq!(out, res.to_string());
    }

    #[test]
    fn empty_interval_track() {
        let a = ti(0, 2, "A");
        let inside = ti(1, 1, "inside");
        let out = render(&[&a, &inside], &DumpConfig::default());
        assert_eq!(tracks(&out), vec!["[___]", "  [] "]);

        let at_end = ti(2, 2, "at_end");
        let out = render(&[&a, &at_end], &DumpConfig::default());
        assert_eq!(tracks(&out), vec!["[_] ", "  []"]);
    }

    #[test]
    fn index_width() {
        let tis: Intervals = (0..12).map(|i| ti(i, i + 1, "")).collect();
        let out = tis.render(&DumpConfig::default());
        assert!(out.lines().next().is_some_and(|l| l.starts_with(" 0 : [")));
        assert!(out.lines().nth(11).is_some_and(|l| l.starts_with("11 : ")));
    }

    #[test]
    fn aliased_input_is_refused() {
        let a = ti(0, 2, "A");
        let b = a.clone();
        assert_eq!(render(&[&a, &b, &a], &DumpConfig::default()), ALIASED);
        assert_ne!(render(&[&a, &b], &DumpConfig::default()), ALIASED);
    }
}
