pub mod gap;
pub mod intervals;
pub mod overlap;
