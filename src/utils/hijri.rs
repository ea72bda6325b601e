use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names as written in Indonesia (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabiul Awal",
    "Rabiul Akhir",
    "Jumadil Awal",
    "Jumadil Akhir",
    "Rajab",
    "Syaban",
    "Ramadhan",
    "Syawal",
    "Dzulqaidah",
    "Dzulhijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "?"
    }
}

pub fn to_hijri_string(date: NaiveDate) -> Result<String> {
    let hd = HijriDate::from_gr(
        date.year() as usize,
        date.month() as usize,
        date.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    Ok(format!(
        "{} {} {} H",
        hd.day(),
        hijri_month_name(hd.month()),
        hd.year()
    ))
}

/// Hijri label for the tracked date, or an empty string when the date is
/// outside what the converter supports.
pub fn hijri_label(date: NaiveDate) -> String {
    to_hijri_string(date).unwrap_or_else(|e| {
        log::debug!("{}", e);
        String::new()
    })
}
