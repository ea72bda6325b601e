use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::{DailyEntry, PrayerSlot};
use crate::reference::{surah_by_index, ReferenceError};
use crate::store::EntryStore;

pub const EXPORT_FILENAME: &str = "Ramadhan_Tracker_2026_Export.csv";

const DELIMITER: &str = ",";

pub const HEADER: [&str; 10] = [
    "Tanggal",
    "Maghrib",
    "Isya",
    "Tarawih",
    "Subuh",
    "Dzuhur",
    "Ashar",
    "Surah Terakhir",
    "Ayat",
    "Infaq (Rp)",
];

/// Prayer columns start at maghrib, where the fasting day's night begins.
const PRAYER_COLUMNS: [PrayerSlot; 6] = [
    PrayerSlot::Maghrib,
    PrayerSlot::Isya,
    PrayerSlot::Tarawih,
    PrayerSlot::Subuh,
    PrayerSlot::Dzuhur,
    PrayerSlot::Ashar,
];

/// All entries as CSV, oldest first. Values are enums, integers and surah
/// names, none of which contain the delimiter, so nothing is quoted.
pub fn export_csv(store: &EntryStore) -> Result<String, ReferenceError> {
    let mut out = HEADER.join(DELIMITER);
    out.push('\n');
    for entry in store.sorted() {
        out.push_str(&row(entry)?);
        out.push('\n');
    }
    Ok(out)
}

fn row(entry: &DailyEntry) -> Result<String, ReferenceError> {
    let surah = surah_by_index(entry.quran.surah_index)?;
    let mut fields: Vec<String> = Vec::with_capacity(HEADER.len());
    fields.push(entry.date.clone());
    fields.extend(
        PRAYER_COLUMNS
            .iter()
            .map(|slot| entry.prayers.get(*slot).as_str().to_string()),
    );
    fields.push(surah.name.to_string());
    fields.push(entry.quran.ayah.to_string());
    fields.push(entry.infaq.to_string());
    Ok(fields.join(DELIMITER))
}

/// Write the export into `dir` (or to `path` when it names a file) and
/// return the written path.
pub fn write_export(store: &EntryStore, path: &Path) -> Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(EXPORT_FILENAME)
    } else {
        path.to_path_buf()
    };
    let csv = export_csv(store)?;
    std::fs::write(&target, csv).with_context(|| format!("Writing {:?}", target))?;
    log::info!("Exported {} entries to {:?}", store.len(), target);
    Ok(target)
}
