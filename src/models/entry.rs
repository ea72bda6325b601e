use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{DailyPrayerRecord, PrayerSlot, PrayerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranProgress {
    /// 0-based index into the surah table.
    pub surah_index: usize,
    /// Last verse read, 1-based.
    pub ayah: u32,
}

impl Default for QuranProgress {
    fn default() -> Self {
        Self {
            surah_index: 0,
            ayah: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: String,
    #[serde(default)]
    pub prayers: DailyPrayerRecord,
    #[serde(default)]
    pub quran: QuranProgress,
    #[serde(default)]
    pub infaq: u64,
}

impl DailyEntry {
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            prayers: DailyPrayerRecord::default(),
            quran: QuranProgress::default(),
            infaq: 0,
        }
    }
}

/// Partial changes to a [`DailyEntry`].
///
/// Prayers merge slot by slot; `quran` and `infaq` replace the stored value
/// when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub prayers: BTreeMap<PrayerSlot, PrayerStatus>,
    pub quran: Option<QuranProgress>,
    pub infaq: Option<u64>,
}

impl EntryPatch {
    pub fn prayer(slot: PrayerSlot, status: PrayerStatus) -> Self {
        Self::default().with_prayer(slot, status)
    }

    pub fn quran(progress: QuranProgress) -> Self {
        Self::default().with_quran(progress)
    }

    pub fn infaq(amount: u64) -> Self {
        Self::default().with_infaq(amount)
    }

    pub fn with_prayer(mut self, slot: PrayerSlot, status: PrayerStatus) -> Self {
        self.prayers.insert(slot, status);
        self
    }

    pub fn with_quran(mut self, progress: QuranProgress) -> Self {
        self.quran = Some(progress);
        self
    }

    pub fn with_infaq(mut self, amount: u64) -> Self {
        self.infaq = Some(amount);
        self
    }

    pub fn apply_to(&self, entry: &mut DailyEntry) {
        for (slot, status) in &self.prayers {
            entry.prayers.set(*slot, *status);
        }
        if let Some(quran) = self.quran {
            entry.quran = quran;
        }
        if let Some(infaq) = self.infaq {
            entry.infaq = infaq;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let mut entry = DailyEntry::new("2026-02-19");
        entry.quran = QuranProgress {
            surah_index: 1,
            ayah: 255,
        };
        entry.infaq = 25000;

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2026-02-19");
        assert_eq!(json["quran"]["surahIndex"], 1);
        assert_eq!(json["quran"]["ayah"], 255);
        assert_eq!(json["infaq"], 25000);
        assert_eq!(json["prayers"]["tarawih"], "none");
    }

    #[test]
    fn test_patch_only_touches_named_fields() {
        let mut entry = DailyEntry::new("2026-02-20");
        entry.prayers.subuh = PrayerStatus::Jamaah;
        entry.infaq = 10000;

        EntryPatch::prayer(PrayerSlot::Isya, PrayerStatus::Sendiri).apply_to(&mut entry);

        assert_eq!(entry.prayers.subuh, PrayerStatus::Jamaah);
        assert_eq!(entry.prayers.isya, PrayerStatus::Sendiri);
        assert_eq!(entry.infaq, 10000);
        assert_eq!(entry.quran, QuranProgress::default());
    }
}
