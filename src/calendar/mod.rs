pub mod day;

pub use day::{resolve, DayPolicy, ResolvedDay};

/// Length of the tracked month.
pub const RAMADAN_DAYS: i64 = 30;
