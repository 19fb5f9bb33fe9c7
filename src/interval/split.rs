use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::duration::Duration;
use crate::interval::Interval;
use crate::{Error, Result};

fn block_count(ratio: Decimal, dur: Duration) -> Result<usize> {
    ratio.to_usize().ok_or_else(|| Error::InvalidDuration(format!("too many blocks of {dur}")))
}

fn out_of_range(dur: Duration) -> Error {
    Error::InvalidDuration(format!("blocks of {dur} leave the representable time range"))
}

fn check_step(dur: Duration) -> Result<()> {
    if !dur.is_positive() {
        return Err(Error::InvalidDuration(format!("split size must be positive, got {dur}")));
    }
    Ok(())
}

impl Interval {
    /// Splits into consecutive blocks of `dur`, left to right. The last
    /// block is stretched to reach the end, so coverage is exact.
    ///
    /// ```text
    /// Source:  [     |     |     | ]
    /// Result:  [ dur | dur | dur+  ]
    /// ```
    ///
    /// A zero-length interval yields nothing. An interval no longer than
    /// `dur` is returned whole.
    pub fn split(&self, dur: Duration) -> Result<Vec<Interval>> {
        check_step(dur)?;
        let len = self.len();
        if len.is_zero() {
            return Ok(Vec::new());
        }
        if len <= dur {
            return Ok(vec![self.clone()]);
        }

        let num = block_count((len / dur).floor(), dur)?;
        let mut tis = Vec::with_capacity(num);
        let mut st = self.st;
        for i in 0..num {
            let en = if i + 1 < num { st + dur } else { self.en };
            tis.push(Interval { st, en, ..self.clone() });
            st = en;
        }
        Ok(tis)
    }

    /// Tiles blocks of exactly `dur` from the right edge leftwards. The
    /// leftmost block extends past the start when the length is not a
    /// multiple of `dur`. Blocks come back in tiling order, so the first one
    /// ends at `en`.
    ///
    /// ```text
    /// Direction:     <------------------|
    /// Source:             [ |     |     ]
    /// Result:         [ dur | dur | dur ]
    /// ```
    pub fn split_extend_leftwards(&self, dur: Duration) -> Result<Vec<Interval>> {
        check_step(dur)?;
        let len = self.len();
        if len.is_zero() {
            return Ok(Vec::new());
        }

        let num = block_count((len / dur).ceil(), dur)?;
        let mut tis = Vec::with_capacity(num);
        let mut en = self.en;
        for _ in 0..num {
            let st = en.checked_sub(dur).ok_or_else(|| out_of_range(dur))?;
            tis.push(Interval { st, en, ..self.clone() });
            en = st;
        }
        Ok(tis)
    }

    /// Tiles blocks of exactly `dur` from the left edge rightwards. The
    /// rightmost block extends past the end when the length is not a
    /// multiple of `dur`.
    ///
    /// ```text
    /// Direction:  |----------------->
    /// Source:     [     |     | ]
    /// Result:     [ dur | dur | dur ]
    /// ```
    pub fn split_extend_rightwards(&self, dur: Duration) -> Result<Vec<Interval>> {
        check_step(dur)?;
        let len = self.len();
        if len.is_zero() {
            return Ok(Vec::new());
        }

        let num = block_count((len / dur).ceil(), dur)?;
        let mut tis = Vec::with_capacity(num);
        let mut st = self.st;
        for _ in 0..num {
            let en = st.checked_add(dur).ok_or_else(|| out_of_range(dur))?;
            tis.push(Interval { st, en, ..self.clone() });
            st = en;
        }
        Ok(tis)
    }
}
