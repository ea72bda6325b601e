use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::day::DEFAULT_ROLLOVER_HOUR;
use crate::calendar::DayPolicy;
use crate::reference::ramadan_start_2026;

fn default_start_date() -> NaiveDate {
    ramadan_start_2026()
}
fn default_rollover_hour() -> u32 {
    DEFAULT_ROLLOVER_HOUR
}
fn default_location_name() -> String {
    "Jakarta".to_string()
}
fn default_calc_method() -> String {
    // Fajr 20°, isha 18°: the same angles Kemenag RI uses.
    "Singapore".to_string()
}
fn default_madhab() -> String {
    "Shafi".to_string()
}
fn default_timezone_offset() -> i32 {
    420
}
fn default_imsak_offset() -> i64 {
    10
}
fn default_tick_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayPolicyKind {
    #[default]
    EveningRollover,
    Calendar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RamadanConfig {
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub day_policy: DayPolicyKind,
    #[serde(default = "default_rollover_hour")]
    pub rollover_hour: u32,
}

impl Default for RamadanConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            day_policy: DayPolicyKind::default(),
            rollover_hour: default_rollover_hour(),
        }
    }
}

impl RamadanConfig {
    pub fn policy(&self) -> DayPolicy {
        match self.day_policy {
            DayPolicyKind::EveningRollover => DayPolicy::EveningRollover {
                hour: self.rollover_hour.min(23),
            },
            DayPolicyKind::Calendar => DayPolicy::Calendar,
        }
    }
}

/// Coordinates for computing prayer times. Without this section the
/// built-in Jakarta timetable is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_location_name")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_calc_method")]
    pub calc_method: String,
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: i32, // minutes from UTC
    /// Minutes between imsak and subuh.
    #[serde(default = "default_imsak_offset")]
    pub imsak_offset_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_seconds: default_tick_seconds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ramadan: RamadanConfig,
    #[serde(default)]
    pub location: Option<LocationConfig>,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "ramadhan-tracker")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("ramadhan.db"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Serializing config")
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn location_label(&self) -> String {
        match &self.location {
            Some(loc) => format!("{} ({:.2}, {:.2})", loc.name, loc.latitude, loc.longitude),
            None => "Jakarta (Default)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.ramadan.start_date, ramadan_start_2026());
        assert_eq!(
            config.ramadan.policy(),
            DayPolicy::EveningRollover { hour: 18 }
        );
        assert!(config.location.is_none());
        assert_eq!(config.location_label(), "Jakarta (Default)");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ramadan]
day_policy = "calendar"

[location]
latitude = -6.9
longitude = 107.6
name = "Bandung"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ramadan.policy(), DayPolicy::Calendar);
        let loc = config.location.as_ref().unwrap();
        assert_eq!(loc.calc_method, "Singapore");
        assert_eq!(loc.timezone_offset, 420);
        assert_eq!(config.display.tick_seconds, 30);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.ramadan.rollover_hour = 19;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            loaded.ramadan.policy(),
            DayPolicy::EveningRollover { hour: 19 }
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ramadan\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
