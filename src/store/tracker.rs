use anyhow::Result;
use rusqlite::Connection;

use crate::db::repository::ThemeRepo;
use crate::models::{DailyEntry, EntryPatch, PrayerSlot, PrayerStatus, QuranProgress, Theme};
use crate::reference::surah_by_index;
use crate::store::EntryStore;
use crate::utils::format::{parse_amount, parse_verse};

/// Quick-add infaq amounts in rupiah.
pub const INFAQ_PRESETS: [u64; 4] = [10_000, 25_000, 50_000, 100_000];

/// Application state: the loaded entries, the theme and the database they
/// are mirrored to. Every mutation is persisted before it returns.
pub struct Tracker {
    conn: Connection,
    store: EntryStore,
    theme: Theme,
}

impl Tracker {
    pub fn open(conn: Connection) -> Self {
        let store = EntryStore::load_all(&conn);
        let theme = ThemeRepo::load(&conn);
        log::debug!("Loaded {} entries, theme {}", store.len(), theme.as_str());
        Self { conn, store, theme }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn entry(&self, date_key: &str) -> DailyEntry {
        self.store.get_entry(date_key)
    }

    /// Merge `patch` into the entry for `date_key` and persist the store.
    pub fn apply(&mut self, date_key: &str, patch: EntryPatch) -> Result<DailyEntry> {
        let entry = self.store.update_entry(date_key, patch).clone();
        self.store.persist_all(&self.conn)?;
        Ok(entry)
    }

    pub fn set_prayer(
        &mut self,
        date_key: &str,
        slot: PrayerSlot,
        status: PrayerStatus,
    ) -> Result<DailyEntry> {
        self.apply(date_key, EntryPatch::prayer(slot, status))
    }

    /// Choosing the status a slot already has clears it.
    pub fn toggle_prayer(
        &mut self,
        date_key: &str,
        slot: PrayerSlot,
        status: PrayerStatus,
    ) -> Result<DailyEntry> {
        let current = self.entry(date_key).prayers.get(slot);
        self.set_prayer(date_key, slot, status.toggled(current))
    }

    /// Switch to another surah, starting again from its first verse.
    pub fn select_surah(&mut self, date_key: &str, surah_index: usize) -> Result<DailyEntry> {
        surah_by_index(surah_index)?;
        let current = self.entry(date_key).quran;
        if current.surah_index == surah_index {
            return Ok(self.entry(date_key));
        }
        self.apply(
            date_key,
            EntryPatch::quran(QuranProgress {
                surah_index,
                ayah: 1,
            }),
        )
    }

    /// Set the last verse read, clamped to the current surah.
    pub fn set_ayah(&mut self, date_key: &str, ayah: u32) -> Result<DailyEntry> {
        let current = self.entry(date_key).quran;
        let surah = surah_by_index(current.surah_index)?;
        self.apply(
            date_key,
            EntryPatch::quran(QuranProgress {
                surah_index: current.surah_index,
                ayah: ayah.clamp(1, surah.verses),
            }),
        )
    }

    pub fn set_ayah_input(&mut self, date_key: &str, raw: &str) -> Result<DailyEntry> {
        self.set_ayah(date_key, parse_verse(raw))
    }

    pub fn step_ayah(&mut self, date_key: &str, delta: i64) -> Result<DailyEntry> {
        let current = i64::from(self.entry(date_key).quran.ayah);
        let target = (current + delta).clamp(1, i64::from(u32::MAX)) as u32;
        self.set_ayah(date_key, target)
    }

    pub fn set_infaq(&mut self, date_key: &str, amount: u64) -> Result<DailyEntry> {
        self.apply(date_key, EntryPatch::infaq(amount))
    }

    pub fn set_infaq_input(&mut self, date_key: &str, raw: &str) -> Result<DailyEntry> {
        self.set_infaq(date_key, parse_amount(raw))
    }

    pub fn add_infaq(&mut self, date_key: &str, amount: u64) -> Result<DailyEntry> {
        let current = self.entry(date_key).infaq;
        self.set_infaq(date_key, current.saturating_add(amount))
    }

    pub fn reset_infaq(&mut self, date_key: &str) -> Result<DailyEntry> {
        self.set_infaq(date_key, 0)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        ThemeRepo::save(&self.conn, theme)?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggled())
    }
}
