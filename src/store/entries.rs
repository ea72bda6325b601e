use anyhow::{Context, Result};
use rusqlite::Connection;
use serde_json::Value;
use std::collections::HashMap;

use crate::db::repository::{MetaRepo, ENTRIES_KEY};
use crate::models::{DailyEntry, EntryPatch, PrayerStatus, QuranProgress};
use crate::reference::surah_by_index;

/// Daily entries keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: HashMap<String, DailyEntry>,
}

impl EntryStore {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyEntry> {
        self.entries.values()
    }

    /// Entries in ascending date order.
    pub fn sorted(&self) -> Vec<&DailyEntry> {
        let mut entries: Vec<&DailyEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date));
        entries
    }

    /// The stored entry, or a blank one for that date. Does not insert.
    pub fn get_entry(&self, date_key: &str) -> DailyEntry {
        self.entries
            .get(date_key)
            .cloned()
            .unwrap_or_else(|| DailyEntry::new(date_key))
    }

    /// Merge `patch` onto the current entry for `date_key` and store it.
    pub fn update_entry(&mut self, date_key: &str, patch: EntryPatch) -> &DailyEntry {
        let mut entry = self.get_entry(date_key);
        patch.apply_to(&mut entry);
        self.entries.insert(date_key.to_string(), entry);
        &self.entries[date_key]
    }

    /// Load persisted entries. Missing or unreadable state yields an empty store.
    pub fn load_all(conn: &Connection) -> Self {
        let raw = match MetaRepo::get(conn, ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("Could not read saved entries: {}", e);
                return Self::default();
            }
        };
        Self::from_json(&raw)
    }

    /// Parse the saved map entry by entry. Only an unreadable top level
    /// yields an empty store; a bad entry is repaired or dropped on its own.
    pub fn from_json(raw: &str) -> Self {
        let parsed: HashMap<String, Value> = match serde_json::from_str(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::warn!("Saved entries are malformed, starting empty: {}", e);
                return Self::default();
            }
        };

        let entries = parsed
            .into_iter()
            .filter_map(|(key, mut value)| {
                sanitize_entry(&key, &mut value);
                let mut entry: DailyEntry = match serde_json::from_value(value) {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::warn!("Dropping unreadable entry {}: {}", key, e);
                        return None;
                    }
                };
                if entry.date != key {
                    log::warn!("Entry stored under {} claims date {}", key, entry.date);
                    entry.date = key.clone();
                }
                repair_quran(&mut entry);
                Some((key, entry))
            })
            .collect();
        Self { entries }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).context("Serializing entries")
    }

    /// Write every entry back. An empty store is never written, so a store
    /// that failed to load cannot wipe what is on disk.
    pub fn persist_all(&self, conn: &Connection) -> Result<bool> {
        if self.is_empty() {
            log::debug!("Skipping persist of empty store");
            return Ok(false);
        }
        MetaRepo::set(conn, ENTRIES_KEY, &self.to_json()?)?;
        log::debug!("Persisted {} entries", self.len());
        Ok(true)
    }
}

/// Coerce field values the web tracker could save (negative or fractional
/// numbers, unknown statuses) into ones `DailyEntry` accepts.
fn sanitize_entry(key: &str, value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };
    if !obj.get("date").is_some_and(Value::is_string) {
        obj.insert("date".to_string(), Value::from(key));
    }

    if obj.get("infaq").is_some_and(|v| v.as_u64().is_none()) {
        log::warn!("Resetting invalid infaq {:?} on {}", obj.get("infaq"), key);
        obj.insert("infaq".to_string(), Value::from(0u64));
    }

    let quran_ok = obj.get("quran").is_none_or(|q| {
        q.get("surahIndex").and_then(Value::as_u64).is_some()
            && q.get("ayah")
                .and_then(Value::as_u64)
                .is_some_and(|n| n <= u64::from(u32::MAX))
    });
    if !quran_ok {
        log::warn!("Resetting invalid Quran progress {:?} on {}", obj.get("quran"), key);
        obj.remove("quran");
    }

    if obj.get("prayers").is_some_and(|v| !v.is_object()) {
        log::warn!("Resetting invalid prayer record on {}", key);
        obj.remove("prayers");
    }
    if let Some(prayers) = obj.get_mut("prayers").and_then(Value::as_object_mut) {
        for (slot, status) in prayers.iter_mut() {
            if serde_json::from_value::<PrayerStatus>(status.clone()).is_err() {
                log::warn!("Clearing unknown status {} for {} on {}", status, slot, key);
                *status = Value::from(PrayerStatus::None.as_str());
            }
        }
    }
}

fn repair_quran(entry: &mut DailyEntry) {
    let valid = surah_by_index(entry.quran.surah_index)
        .map(|s| entry.quran.ayah >= 1 && entry.quran.ayah <= s.verses)
        .unwrap_or(false);
    if !valid {
        log::warn!(
            "Resetting invalid Quran progress {:?} on {}",
            entry.quran,
            entry.date
        );
        entry.quran = QuranProgress::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::PrayerSlot;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::default();
        store.update_entry(
            "2026-02-19",
            EntryPatch::prayer(PrayerSlot::Subuh, PrayerStatus::Jamaah)
                .with_prayer(PrayerSlot::Tarawih, PrayerStatus::Sendiri)
                .with_quran(QuranProgress {
                    surah_index: 1,
                    ayah: 40,
                })
                .with_infaq(10000),
        );
        store
    }

    #[test]
    fn test_get_entry_defaults_without_inserting() {
        let store = EntryStore::default();
        let entry = store.get_entry("2026-02-25");
        assert_eq!(entry, DailyEntry::new("2026-02-25"));
        assert_eq!(entry.quran, QuranProgress { surah_index: 0, ayah: 1 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_infaq_on_empty_store() {
        let mut store = EntryStore::default();
        store.update_entry("2026-02-19", EntryPatch::infaq(25000));

        assert_eq!(store.len(), 1);
        let entry = store.get_entry("2026-02-19");
        assert_eq!(entry.infaq, 25000);
        assert!(entry.prayers.statuses().all(|s| s == PrayerStatus::None));
    }

    #[test]
    fn test_empty_patch_is_idempotent() {
        let mut store = sample_store();
        let before = store.get_entry("2026-02-19");
        store.update_entry("2026-02-19", EntryPatch::default());
        assert_eq!(store.get_entry("2026-02-19"), before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_prayer_patch_merges_slot_by_slot() {
        let mut store = sample_store();
        let before = store.get_entry("2026-02-19");

        store.update_entry(
            "2026-02-19",
            EntryPatch::prayer(PrayerSlot::Ashar, PrayerStatus::Missed),
        );

        let after = store.get_entry("2026-02-19");
        let mut expected = before.clone();
        expected.prayers.ashar = PrayerStatus::Missed;
        assert_eq!(after, expected);
        assert_eq!(after.prayers.subuh, PrayerStatus::Jamaah);
        assert_eq!(after.prayers.tarawih, PrayerStatus::Sendiri);
    }

    #[test]
    fn test_updates_touch_only_their_key() {
        let mut store = sample_store();
        store.update_entry("2026-02-20", EntryPatch::infaq(5000));
        assert_eq!(store.get_entry("2026-02-19").infaq, 10000);
        assert_eq!(store.get_entry("2026-02-20").infaq, 5000);
    }

    #[test]
    fn test_load_missing_state_is_empty() {
        let conn = conn();
        assert!(EntryStore::load_all(&conn).is_empty());
    }

    #[test]
    fn test_load_malformed_state_is_empty() {
        let conn = conn();
        MetaRepo::set(&conn, ENTRIES_KEY, "{not json").unwrap();
        assert!(EntryStore::load_all(&conn).is_empty());
    }

    #[test]
    fn test_persist_then_load() {
        let conn = conn();
        let store = sample_store();
        assert!(store.persist_all(&conn).unwrap());
        assert_eq!(EntryStore::load_all(&conn), store);
    }

    #[test]
    fn test_empty_store_does_not_overwrite() {
        let conn = conn();
        sample_store().persist_all(&conn).unwrap();

        assert!(!EntryStore::default().persist_all(&conn).unwrap());
        assert_eq!(EntryStore::load_all(&conn).len(), 1);
    }

    #[test]
    fn test_load_reads_web_layout() {
        let raw = r#"{
            "2026-02-19": {
                "date": "2026-02-19",
                "prayers": {"subuh":"jamaah","dzuhur":"sendiri","ashar":"none",
                            "maghrib":"missed","isya":"none","tarawih":"jamaah"},
                "quran": {"surahIndex": 2, "ayah": 14},
                "infaq": 50000
            }
        }"#;
        let store = EntryStore::from_json(raw);
        let entry = store.get_entry("2026-02-19");
        assert_eq!(entry.prayers.dzuhur, PrayerStatus::Sendiri);
        assert_eq!(entry.prayers.maghrib, PrayerStatus::Missed);
        assert_eq!(entry.quran, QuranProgress { surah_index: 2, ayah: 14 });
        assert_eq!(entry.infaq, 50000);
    }

    #[test]
    fn test_load_repairs_out_of_range_quran() {
        let raw = r#"{
            "2026-02-19": {"date":"2026-02-19","prayers":{},
                           "quran":{"surahIndex":200,"ayah":3},"infaq":0},
            "2026-02-20": {"date":"2026-02-20","prayers":{},
                           "quran":{"surahIndex":0,"ayah":9},"infaq":0}
        }"#;
        let store = EntryStore::from_json(raw);
        assert_eq!(store.get_entry("2026-02-19").quran, QuranProgress::default());
        assert_eq!(store.get_entry("2026-02-20").quran, QuranProgress::default());
    }

    #[test]
    fn test_one_bad_entry_keeps_the_rest() {
        let raw = r#"{
            "2026-02-19": {"date":"2026-02-19","prayers":{"subuh":"jamaah"},
                           "quran":{"surahIndex":1,"ayah":5},"infaq":25000},
            "2026-02-20": {"date":"2026-02-20","prayers":{"isya":"sendiri"},
                           "quran":{"surahIndex":0,"ayah":-3},"infaq":-500}
        }"#;
        let store = EntryStore::from_json(raw);
        assert_eq!(store.len(), 2);

        let good = store.get_entry("2026-02-19");
        assert_eq!(good.infaq, 25000);
        assert_eq!(good.quran, QuranProgress { surah_index: 1, ayah: 5 });

        let repaired = store.get_entry("2026-02-20");
        assert_eq!(repaired.infaq, 0);
        assert_eq!(repaired.quran, QuranProgress::default());
        assert_eq!(repaired.prayers.isya, PrayerStatus::Sendiri);
    }

    #[test]
    fn test_unreadable_entry_is_dropped_alone() {
        let raw = r#"{
            "2026-02-19": {"date":"2026-02-19","prayers":{"maghrib":"bolos"},"infaq":1.5},
            "2026-02-20": "garbage",
            "2026-02-21": {"prayers":{},"infaq":7000}
        }"#;
        let store = EntryStore::from_json(raw);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_entry("2026-02-19").prayers.maghrib, PrayerStatus::None);
        assert_eq!(store.get_entry("2026-02-19").infaq, 0);
        assert_eq!(store.get_entry("2026-02-21").date, "2026-02-21");
        assert_eq!(store.get_entry("2026-02-21").infaq, 7000);
    }

    #[test]
    fn test_bad_entry_does_not_wipe_history_on_next_save() {
        let conn = conn();
        let raw = r#"{
            "2026-02-19": {"date":"2026-02-19","prayers":{},"infaq":25000},
            "2026-02-20": {"date":"2026-02-20","prayers":{},"infaq":-500}
        }"#;
        MetaRepo::set(&conn, ENTRIES_KEY, raw).unwrap();

        let mut store = EntryStore::load_all(&conn);
        store.update_entry("2026-02-21", EntryPatch::infaq(1000));
        store.persist_all(&conn).unwrap();

        let reloaded = EntryStore::load_all(&conn);
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.get_entry("2026-02-19").infaq, 25000);
        assert_eq!(reloaded.get_entry("2026-02-21").infaq, 1000);
    }
}
