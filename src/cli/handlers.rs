use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDateTime};
use std::path::Path;
use std::str::FromStr;

use crate::calendar::ResolvedDay;
use crate::cli::args::{ConfigCommands, ThemeChoice};
use crate::config::AppConfig;
use crate::export::write_export;
use crate::models::stats::{
    congregation_count, history, progress_percent, total_prayers_marked, verses_read_today,
};
use crate::models::{
    DailyEntry, HistoryRow, ImsakiyahTime, PrayerSlot, PrayerStatus, StoreSummary, Theme,
};
use crate::prayer_times::{resolve_times, TimesSource};
use crate::reference::{insight, surah_by_index, SURAHS};
use crate::store::Tracker;
use crate::utils::format::{format_rupiah, pad_right, progress_bar};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const EMERALD: &str = "\x1b[38;2;16;185;129m";

// ─── Clock ───────────────────────────────────────────────────────────────────

/// The local instant to resolve against, honouring `--at`.
pub fn current_instant(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        None => Ok(Local::now().naive_local()),
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .with_context(|| format!("Invalid --at '{}', expected YYYY-MM-DDTHH:MM", s)),
    }
}

fn status_color(status: PrayerStatus) -> &'static str {
    match status {
        PrayerStatus::Jamaah => GREEN,
        PrayerStatus::Sendiri => EMERALD,
        PrayerStatus::Missed => RED,
        PrayerStatus::None => DIM,
    }
}

fn print_day_banner(resolved: &ResolvedDay) {
    let color = if resolved.is_active() { EMERALD } else { AMBER };
    println_colored!(
        color,
        "  {}  ·  {}",
        resolved.label(),
        resolved.date.format("%A, %d %B %Y")
    );
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(tracker: &Tracker, config: &AppConfig, resolved: &ResolvedDay) -> Result<()> {
    let entry = tracker.entry(&resolved.date_key());
    let (times, _) = resolve_times(config.location.as_ref(), resolved.day, resolved.date);

    println!();
    print_day_banner(resolved);
    println_colored!(DIM, "  \"{}\"", insight(resolved.day));
    println!();
    print_entry(&entry, &times)?;
    println!();
    println_colored!(
        BOLD,
        "  Jamaah: {}  ·  Ayat: {}  ·  Infaq: {}  ·  Hari tersisa: {}",
        congregation_count(&entry),
        verses_read_today(&entry),
        format_rupiah(entry.infaq),
        resolved.remaining_days()
    );
    println!();
    Ok(())
}

fn print_entry(entry: &DailyEntry, times: &ImsakiyahTime) -> Result<()> {
    for slot in PrayerSlot::all() {
        let status = entry.prayers.get(slot);
        println_colored!(
            status_color(status),
            "  {}  {}  {}",
            pad_right(slot.display_name(), 8),
            times.time_for(slot),
            status.label()
        );
    }
    let surah = surah_by_index(entry.quran.surah_index)?;
    let percent = progress_percent(entry);
    println!();
    println!(
        "  Tilawah  {}. {} ({})  ayat {}/{}",
        surah.number, surah.name, surah.name_arabic, entry.quran.ayah, surah.verses
    );
    println_colored!(DIM, "           {} {}%", progress_bar(percent, 20), percent);
    println!("  Infaq    {}", format_rupiah(entry.infaq));
    Ok(())
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, resolved: &ResolvedDay) -> Result<()> {
    let (times, source) = resolve_times(config.location.as_ref(), resolved.day, resolved.date);
    let source_note = match source {
        TimesSource::Computed => "computed",
        TimesSource::Table => "built-in table",
    };

    println!();
    println_colored!(
        EMERALD,
        "  Imsakiyah — {} ({})",
        config.location_label(),
        resolved.date_key()
    );
    println_colored!(DIM, "  {}", source_note);
    println!();
    let rows = [
        ("Imsak", times.imsak.as_str()),
        ("Subuh", times.subuh.as_str()),
        ("Dzuhur", times.dzuhur.as_str()),
        ("Ashar", times.ashar.as_str()),
        ("Maghrib", times.maghrib.as_str()),
        ("Isya", times.isya.as_str()),
        ("Tarawih", times.time_for(PrayerSlot::Tarawih)),
    ];
    for (name, time) in rows {
        println_colored!(BOLD, "  {:<10}  {}", name, time);
    }
    println!();
    Ok(())
}

// ─── Mark prayer ─────────────────────────────────────────────────────────────

pub fn handle_mark(
    tracker: &mut Tracker,
    resolved: &ResolvedDay,
    prayer: &str,
    status: &str,
    toggle: bool,
) -> Result<()> {
    let slot = PrayerSlot::from_str(prayer).map_err(|_| {
        anyhow!(
            "Unknown prayer '{}'. Use: subuh, dzuhur, ashar, maghrib, isya, tarawih",
            prayer
        )
    })?;
    let status = PrayerStatus::from_str(status)
        .map_err(|_| anyhow!("Unknown status '{}'. Use: jamaah, sendiri, missed, none", status))?;

    let key = resolved.date_key();
    let entry = if toggle {
        tracker.toggle_prayer(&key, slot, status)?
    } else {
        tracker.set_prayer(&key, slot, status)?
    };
    let stored = entry.prayers.get(slot);
    println_colored!(
        status_color(stored),
        "  ✓ {} ({}) — {}",
        slot.display_name(),
        key,
        stored.label()
    );
    Ok(())
}

// ─── Quran ───────────────────────────────────────────────────────────────────

pub fn handle_quran(
    tracker: &mut Tracker,
    resolved: &ResolvedDay,
    surah: Option<usize>,
    ayah: Option<&str>,
) -> Result<()> {
    let key = resolved.date_key();
    if let Some(number) = surah {
        if !(1..=SURAHS.len()).contains(&number) {
            bail!("Surah must be between 1 and {}", SURAHS.len());
        }
        tracker.select_surah(&key, number - 1)?;
    }
    if let Some(raw) = ayah {
        tracker.set_ayah_input(&key, raw)?;
    }

    let entry = tracker.entry(&key);
    let s = surah_by_index(entry.quran.surah_index)?;
    println_colored!(
        GREEN,
        "  ✓ Tilawah: {} ayat {}/{}  ({}%)",
        s.name,
        entry.quran.ayah,
        s.verses,
        progress_percent(&entry)
    );
    Ok(())
}

// ─── Infaq ───────────────────────────────────────────────────────────────────

pub fn handle_infaq(
    tracker: &mut Tracker,
    resolved: &ResolvedDay,
    amount: Option<&str>,
    add: bool,
    reset: bool,
) -> Result<()> {
    let key = resolved.date_key();
    let entry = match (amount, reset) {
        (_, true) => tracker.reset_infaq(&key)?,
        (Some(raw), false) if add => {
            let value = crate::utils::format::parse_amount(raw);
            tracker.add_infaq(&key, value)?
        }
        (Some(raw), false) => tracker.set_infaq_input(&key, raw)?,
        (None, false) => tracker.entry(&key),
    };
    println_colored!(AMBER, "  Infaq {}: {}", key, format_rupiah(entry.infaq));
    Ok(())
}

// ─── History ─────────────────────────────────────────────────────────────────

pub fn format_history(rows: &[HistoryRow]) -> String {
    if rows.is_empty() {
        return "Belum ada data tercatat.\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        pad_right("Tanggal", 10),
        pad_right("Sholat", 12),
        pad_right("Tilawah Terakhir", 24),
        "Infaq"
    ));
    for row in rows {
        out.push_str(&format!(
            "{}  {}  {}  {}\n",
            pad_right(&row.date, 10),
            pad_right(&row.prayers, 12),
            pad_right(&row.quran, 24),
            format_rupiah(row.infaq)
        ));
    }
    out.push_str(&format!(
        "\nTotal: {} hari tersimpan secara lokal.\n",
        rows.len()
    ));
    out
}

pub fn handle_history(tracker: &Tracker) -> Result<()> {
    println!();
    println_colored!(EMERALD, "  Riwayat Ibadah");
    println!();
    for line in format_history(&history(tracker.store())).lines() {
        println!("  {}", line);
    }
    println!();
    Ok(())
}

// ─── Summary ─────────────────────────────────────────────────────────────────

pub fn handle_summary(tracker: &Tracker, resolved: &ResolvedDay) -> Result<()> {
    let summary = StoreSummary::from_store(tracker.store());
    let today = tracker.entry(&resolved.date_key());

    println!();
    println_colored!(EMERALD, "  Ringkasan Amal Ramadhan");
    println!();
    print_day_banner(resolved);
    println!();
    println_colored!(
        BOLD,
        "  Hari ini:    {} jamaah dari {} sholat tercatat",
        congregation_count(&today),
        total_prayers_marked(&today)
    );
    println!("  Hari tercatat:     {}", summary.days_recorded);
    println!("  Sholat jamaah:     {}", summary.congregation_total);
    println!("  Sholat tercatat:   {}", summary.prayers_marked_total);
    println!("  Hari sempurna:     {}", summary.full_days);
    println_colored!(AMBER, "  Total infaq:       {}", format_rupiah(summary.infaq_total));
    println!("  Hari tersisa:      {}", resolved.remaining_days());
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

pub fn handle_export(tracker: &Tracker, output: Option<&Path>) -> Result<()> {
    let target = output.unwrap_or_else(|| Path::new("."));
    let path = write_export(tracker.store(), target)?;
    println_colored!(
        GREEN,
        "  ✓ Exported {} days to {}",
        tracker.store().len(),
        path.display()
    );
    Ok(())
}

// ─── Theme ───────────────────────────────────────────────────────────────────

pub fn handle_theme(tracker: &mut Tracker, choice: Option<ThemeChoice>) -> Result<()> {
    let theme = match choice {
        None => tracker.theme(),
        Some(ThemeChoice::Light) => tracker.set_theme(Theme::Light)?,
        Some(ThemeChoice::Dark) => tracker.set_theme(Theme::Dark)?,
        Some(ThemeChoice::Toggle) => tracker.toggle_theme()?,
    };
    println!("  Theme: {}", theme.as_str());
    Ok(())
}

// ─── Surahs ──────────────────────────────────────────────────────────────────

pub fn handle_surahs() -> Result<()> {
    for surah in SURAHS.iter() {
        println!(
            "  {:>3}. {}  {:>3} ayat  {}",
            surah.number,
            pad_right(surah.name, 16),
            surah.verses,
            surah.name_arabic
        );
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, action: &ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path()?.display());
        }
        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path()?;
            if path.exists() && !force {
                bail!("{} already exists. Use --force to overwrite.", path.display());
            }
            let written = AppConfig::default().save()?;
            println_colored!(GREEN, "  ✓ Wrote {}", written.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryPatch, QuranProgress};
    use crate::store::EntryStore;
    use insta::assert_snapshot;

    #[test]
    fn test_current_instant_override() {
        let at = current_instant(Some("2026-03-01T18:30")).unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2026-03-01 18:30");
        assert!(current_instant(Some("yesterday")).is_err());
    }

    #[test]
    fn test_format_history_empty() {
        assert_eq!(format_history(&[]), "Belum ada data tercatat.\n");
    }

    #[test]
    fn test_format_history() {
        let mut store = EntryStore::default();
        store.update_entry(
            "2026-02-19",
            EntryPatch::prayer(PrayerSlot::Subuh, PrayerStatus::Jamaah)
                .with_prayer(PrayerSlot::Dzuhur, PrayerStatus::Sendiri)
                .with_infaq(25000),
        );
        store.update_entry(
            "2026-02-20",
            EntryPatch::quran(QuranProgress {
                surah_index: 1,
                ayah: 183,
            }),
        );

        assert_snapshot!(format_history(&history(&store)), @r"
        Tanggal     Sholat        Tilawah Terakhir          Infaq
        2026-02-20  0/0 Jamaah    Al-Baqarah : 183          Rp 0
        2026-02-19  1/2 Jamaah    Al-Fatihah : 1            Rp 25.000

        Total: 2 hari tersimpan secara lokal.
        ");
    }
}
