use serde::{Deserialize, Serialize};

use crate::models::PrayerSlot;

/// Tarawih has no astronomical time; it follows isya at the mosque.
pub const TARAWIH_TIME: &str = "19:45";

/// One day of the fasting timetable, clock times as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImsakiyahTime {
    pub day: i64,
    pub imsak: String,
    pub subuh: String,
    pub dzuhur: String,
    pub ashar: String,
    pub maghrib: String,
    pub isya: String,
}

impl ImsakiyahTime {
    pub fn time_for(&self, slot: PrayerSlot) -> &str {
        match slot {
            PrayerSlot::Subuh => &self.subuh,
            PrayerSlot::Dzuhur => &self.dzuhur,
            PrayerSlot::Ashar => &self.ashar,
            PrayerSlot::Maghrib => &self.maghrib,
            PrayerSlot::Isya => &self.isya,
            PrayerSlot::Tarawih => TARAWIH_TIME,
        }
    }

    /// Imsak followed by the five daily prayers, in order.
    pub fn as_array(&self) -> [&str; 6] {
        [
            &self.imsak,
            &self.subuh,
            &self.dzuhur,
            &self.ashar,
            &self.maghrib,
            &self.isya,
        ]
    }
}
