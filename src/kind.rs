use derive_more::IsVariant;
use strum::{Display as StrumDisplay, EnumString};

/// Classification attached to every interval. Only gap analysis produces
/// the gap variants.
///
/// ```text
///     [              bounds              ]
/// ----------------------------------------------->
///     [left]  [occ]  [inner]  [occ]  [right]
/// ```
#[must_use]
#[derive(
    Debug, Default, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd, IsVariant, StrumDisplay,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SpanKind {
    #[default]
    Occupied,
    /// Free time touching the start of the bounds.
    GapLeft,
    /// Free time touching the end of the bounds.
    GapRight,
    /// Free time touching neither edge.
    GapInner,
    /// The whole of the bounds is free.
    GapWhole,
}

impl SpanKind {
    #[must_use]
    pub const fn is_gap(&self) -> bool {
        !matches!(self, SpanKind::Occupied)
    }

    /// Fill character used by the track renderer.
    #[must_use]
    pub const fn fill(&self) -> char {
        match self {
            SpanKind::Occupied => '_',
            SpanKind::GapLeft => '<',
            SpanKind::GapRight => '>',
            SpanKind::GapInner | SpanKind::GapWhole => 'G',
        }
    }
}
