pub mod calculator;

pub use calculator::{resolve_times, TimesSource};
