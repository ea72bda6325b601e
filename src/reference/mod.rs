//! Fixed data shipped with the tracker: the Ramadhan start date, the surah
//! registry, the fallback timetable and the daily insights.

pub mod imsakiyah;
pub mod quotes;
pub mod surahs;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::calendar::RAMADAN_DAYS;
use crate::models::ImsakiyahTime;

pub use imsakiyah::IMSAKIYAH_JAKARTA_2026;
pub use quotes::insight;
pub use surahs::SURAHS;

/// 1 Ramadhan 1447 H.
pub fn ramadan_start_2026() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 19).unwrap_or(NaiveDate::MIN)
}

pub const TOTAL_VERSES: u32 = 6236;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surah {
    pub number: u16,
    pub name_arabic: &'static str,
    /// Latin transliteration, as used in Indonesian mushaf indexes.
    pub name: &'static str,
    pub verses: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Surah index {0} is out of range (0..=113)")]
    ChapterOutOfRange(usize),
    #[error("Reference data is inconsistent: {0}")]
    Invalid(String),
}

pub fn surah_by_index(index: usize) -> Result<&'static Surah, ReferenceError> {
    SURAHS
        .get(index)
        .ok_or(ReferenceError::ChapterOutOfRange(index))
}

/// Fallback timetable row for a day. Days outside the month use the nearest row.
pub fn imsakiyah_for_day(day: i64) -> ImsakiyahTime {
    let index = (day - 1).clamp(0, RAMADAN_DAYS - 1) as usize;
    IMSAKIYAH_JAKARTA_2026[index].to_time()
}

/// Check the static tables once at startup.
pub fn validate() -> Result<(), ReferenceError> {
    let mut total = 0;
    for (i, surah) in SURAHS.iter().enumerate() {
        if usize::from(surah.number) != i + 1 {
            return Err(ReferenceError::Invalid(format!(
                "surah at index {} is numbered {}",
                i, surah.number
            )));
        }
        if surah.verses == 0 {
            return Err(ReferenceError::Invalid(format!("{} has no verses", surah.name)));
        }
        if surah.name.contains(',') || surah.name.contains('\n') {
            return Err(ReferenceError::Invalid(format!(
                "surah name '{}' contains a delimiter",
                surah.name
            )));
        }
        total += surah.verses;
    }
    if total != TOTAL_VERSES {
        return Err(ReferenceError::Invalid(format!(
            "surah verse counts total {}, expected {}",
            total, TOTAL_VERSES
        )));
    }

    for (i, row) in IMSAKIYAH_JAKARTA_2026.iter().enumerate() {
        if row.day != i as i64 + 1 {
            return Err(ReferenceError::Invalid(format!(
                "imsakiyah row {} is labelled day {}",
                i + 1,
                row.day
            )));
        }
        let time = row.to_time();
        let mut previous: Option<NaiveTime> = None;
        for t in time.as_array() {
            let parsed = NaiveTime::parse_from_str(t, "%H:%M").map_err(|e| {
                ReferenceError::Invalid(format!("day {}: bad time '{}': {}", row.day, t, e))
            })?;
            if previous.is_some_and(|p| p >= parsed) {
                return Err(ReferenceError::Invalid(format!(
                    "day {}: times are not in order",
                    row.day
                )));
            }
            previous = Some(parsed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_tables_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_surah_lookup_bounds() {
        assert_eq!(surah_by_index(0).unwrap().name, "Al-Fatihah");
        assert_eq!(surah_by_index(113).unwrap().name, "An-Nas");
        assert_eq!(surah_by_index(1).unwrap().verses, 286);
        assert_eq!(
            surah_by_index(114),
            Err(ReferenceError::ChapterOutOfRange(114))
        );
    }

    #[test]
    fn test_imsakiyah_for_day_clamps() {
        assert_eq!(imsakiyah_for_day(1).day, 1);
        assert_eq!(imsakiyah_for_day(0).day, 1);
        assert_eq!(imsakiyah_for_day(30).day, 30);
        assert_eq!(imsakiyah_for_day(45).day, 30);
    }
}
