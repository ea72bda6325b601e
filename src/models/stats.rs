use serde::{Deserialize, Serialize};

use crate::calendar::RAMADAN_DAYS;
use crate::models::{DailyEntry, PrayerStatus};
use crate::reference::{surah_by_index, SURAHS};
use crate::store::EntryStore;

pub fn congregation_count(entry: &DailyEntry) -> u32 {
    entry
        .prayers
        .statuses()
        .filter(|s| *s == PrayerStatus::Jamaah)
        .count() as u32
}

pub fn total_prayers_marked(entry: &DailyEntry) -> u32 {
    entry.prayers.statuses().filter(|s| s.is_marked()).count() as u32
}

pub fn remaining_days(day: i64) -> i64 {
    (RAMADAN_DAYS - day).max(0)
}

/// Last verse reached today. Not a running total across days.
pub fn verses_read_today(entry: &DailyEntry) -> u32 {
    entry.quran.ayah
}

/// Position of the current surah within the mushaf, as a percentage.
pub fn progress_percent(entry: &DailyEntry) -> u32 {
    let position = (entry.quran.surah_index + 1) as f64 / SURAHS.len() as f64;
    (position * 100.0).round() as u32
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub days_recorded: u32,
    pub congregation_total: u32,
    pub prayers_marked_total: u32,
    pub infaq_total: u64,
    /// Days with every slot prayed.
    pub full_days: u32,
}

impl StoreSummary {
    pub fn from_store(store: &EntryStore) -> Self {
        store.iter().fold(Self::default(), |mut acc, entry| {
            acc.days_recorded += 1;
            acc.congregation_total += congregation_count(entry);
            acc.prayers_marked_total += total_prayers_marked(entry);
            acc.infaq_total = acc.infaq_total.saturating_add(entry.infaq);
            if entry
                .prayers
                .statuses()
                .all(|s| matches!(s, PrayerStatus::Jamaah | PrayerStatus::Sendiri))
            {
                acc.full_days += 1;
            }
            acc
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub date: String,
    pub prayers: String,
    pub quran: String,
    pub infaq: u64,
}

impl HistoryRow {
    pub fn from_entry(entry: &DailyEntry) -> Self {
        let surah_name = surah_by_index(entry.quran.surah_index)
            .map(|s| s.name)
            .unwrap_or("?");
        Self {
            date: entry.date.clone(),
            prayers: format!(
                "{}/{} Jamaah",
                congregation_count(entry),
                total_prayers_marked(entry)
            ),
            quran: format!("{} : {}", surah_name, entry.quran.ayah),
            infaq: entry.infaq,
        }
    }
}

/// Every stored day, newest first.
pub fn history(store: &EntryStore) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = store.sorted().into_iter().map(HistoryRow::from_entry).collect();
    rows.reverse();
    rows
}
