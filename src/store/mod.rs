pub mod entries;
pub mod tracker;

pub use entries::EntryStore;
pub use tracker::{Tracker, INFAQ_PRESETS};
