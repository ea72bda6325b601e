pub mod entry;
pub mod imsakiyah;
pub mod prayer;
pub mod stats;
pub mod theme;

pub use entry::{DailyEntry, EntryPatch, QuranProgress};
pub use imsakiyah::ImsakiyahTime;
pub use prayer::{DailyPrayerRecord, PrayerSlot, PrayerStatus};
pub use stats::{HistoryRow, StoreSummary};
pub use theme::Theme;
