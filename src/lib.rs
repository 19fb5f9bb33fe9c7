//! Time-interval algebra over timezone-aware instants: exclusion, gap
//! analysis within bounds, overlap and duplicate detection, splitting, and
//! a textual notation with an ASCII track renderer for debugging.

pub mod duration;
pub mod error;
pub mod interval;
pub mod kind;
pub mod parse;
pub mod point;
pub mod render;
pub mod seq;
pub mod time;

pub use error::{Error, Result};
