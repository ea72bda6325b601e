use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerSlot {
    Subuh,
    Dzuhur,
    Ashar,
    Maghrib,
    Isya,
    Tarawih,
}

impl PrayerSlot {
    /// Display order, following the day from dawn.
    pub fn all() -> [PrayerSlot; 6] {
        [
            PrayerSlot::Subuh,
            PrayerSlot::Dzuhur,
            PrayerSlot::Ashar,
            PrayerSlot::Maghrib,
            PrayerSlot::Isya,
            PrayerSlot::Tarawih,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerSlot::Subuh => "Subuh",
            PrayerSlot::Dzuhur => "Dzuhur",
            PrayerSlot::Ashar => "Ashar",
            PrayerSlot::Maghrib => "Maghrib",
            PrayerSlot::Isya => "Isya",
            PrayerSlot::Tarawih => "Tarawih",
        }
    }
}

impl std::fmt::Display for PrayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subuh" | "shubuh" | "fajr" => Ok(PrayerSlot::Subuh),
            "dzuhur" | "zuhur" | "dhuhr" | "zuhr" => Ok(PrayerSlot::Dzuhur),
            "ashar" | "asar" | "asr" => Ok(PrayerSlot::Ashar),
            "maghrib" => Ok(PrayerSlot::Maghrib),
            "isya" | "isha" | "isyak" => Ok(PrayerSlot::Isya),
            "tarawih" | "taraweeh" => Ok(PrayerSlot::Tarawih),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerStatus {
    /// Prayed in congregation.
    Jamaah,
    /// Prayed alone (munfarid).
    Sendiri,
    Missed,
    #[default]
    None,
}

impl PrayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerStatus::Jamaah => "jamaah",
            PrayerStatus::Sendiri => "sendiri",
            PrayerStatus::Missed => "missed",
            PrayerStatus::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrayerStatus::Jamaah => "Jamaah",
            PrayerStatus::Sendiri => "Munfarid",
            PrayerStatus::Missed => "Lewat",
            PrayerStatus::None => "Belum diisi",
        }
    }

    pub fn is_marked(&self) -> bool {
        *self != PrayerStatus::None
    }

    /// Picking the status a slot already holds clears it.
    pub fn toggled(self, current: PrayerStatus) -> PrayerStatus {
        if self == current {
            PrayerStatus::None
        } else {
            self
        }
    }
}

impl FromStr for PrayerStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jamaah" | "congregation" => Ok(PrayerStatus::Jamaah),
            "sendiri" | "munfarid" | "alone" => Ok(PrayerStatus::Sendiri),
            "missed" | "lewat" => Ok(PrayerStatus::Missed),
            "none" | "unset" | "clear" => Ok(PrayerStatus::None),
            _ => Err(anyhow::anyhow!("Unknown prayer status: {}", s)),
        }
    }
}

/// Status of each of the six tracked prayers for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrayerRecord {
    #[serde(default)]
    pub subuh: PrayerStatus,
    #[serde(default)]
    pub dzuhur: PrayerStatus,
    #[serde(default)]
    pub ashar: PrayerStatus,
    #[serde(default)]
    pub maghrib: PrayerStatus,
    #[serde(default)]
    pub isya: PrayerStatus,
    #[serde(default)]
    pub tarawih: PrayerStatus,
}

impl DailyPrayerRecord {
    pub fn get(&self, slot: PrayerSlot) -> PrayerStatus {
        match slot {
            PrayerSlot::Subuh => self.subuh,
            PrayerSlot::Dzuhur => self.dzuhur,
            PrayerSlot::Ashar => self.ashar,
            PrayerSlot::Maghrib => self.maghrib,
            PrayerSlot::Isya => self.isya,
            PrayerSlot::Tarawih => self.tarawih,
        }
    }

    pub fn set(&mut self, slot: PrayerSlot, status: PrayerStatus) {
        let field = match slot {
            PrayerSlot::Subuh => &mut self.subuh,
            PrayerSlot::Dzuhur => &mut self.dzuhur,
            PrayerSlot::Ashar => &mut self.ashar,
            PrayerSlot::Maghrib => &mut self.maghrib,
            PrayerSlot::Isya => &mut self.isya,
            PrayerSlot::Tarawih => &mut self.tarawih,
        };
        *field = status;
    }

    pub fn statuses(&self) -> impl Iterator<Item = PrayerStatus> + '_ {
        PrayerSlot::all().into_iter().map(|slot| self.get(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_aliases() {
        assert_eq!("fajr".parse::<PrayerSlot>().unwrap(), PrayerSlot::Subuh);
        assert_eq!("Zuhr".parse::<PrayerSlot>().unwrap(), PrayerSlot::Dzuhur);
        assert_eq!("isha".parse::<PrayerSlot>().unwrap(), PrayerSlot::Isya);
        assert!("witr".parse::<PrayerSlot>().is_err());
    }

    #[test]
    fn test_toggle_same_status_clears() {
        assert_eq!(
            PrayerStatus::Jamaah.toggled(PrayerStatus::Jamaah),
            PrayerStatus::None
        );
        assert_eq!(
            PrayerStatus::Missed.toggled(PrayerStatus::Jamaah),
            PrayerStatus::Missed
        );
    }

    #[test]
    fn test_record_defaults_missing_keys_to_none() {
        let record: DailyPrayerRecord =
            serde_json::from_str(r#"{"subuh":"jamaah","isya":"sendiri"}"#).unwrap();
        assert_eq!(record.subuh, PrayerStatus::Jamaah);
        assert_eq!(record.isya, PrayerStatus::Sendiri);
        assert_eq!(record.tarawih, PrayerStatus::None);
    }

    #[test]
    fn test_record_serializes_all_six_keys() {
        let json = serde_json::to_value(DailyPrayerRecord::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        for key in ["subuh", "dzuhur", "ashar", "maghrib", "isya", "tarawih"] {
            assert_eq!(obj[key], "none");
        }
    }
}
