use anyhow::{anyhow, Result};
use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime};
use salah::prelude::*;

use crate::config::LocationConfig;
use crate::models::ImsakiyahTime;
use crate::reference::imsakiyah_for_day;

pub struct PrayerCalculator {
    pub lat: f64,
    pub lng: f64,
    pub method_str: String,
    pub madhab_str: String,
    pub tz_offset_minutes: i32,
    pub imsak_offset_minutes: i64,
}

impl PrayerCalculator {
    pub fn new(location: &LocationConfig) -> Result<Self> {
        // Validate method + madhab early
        parse_method(&location.calc_method)?;
        parse_madhab(&location.madhab)?;
        Ok(Self {
            lat: location.latitude,
            lng: location.longitude,
            method_str: location.calc_method.clone(),
            madhab_str: location.madhab.clone(),
            tz_offset_minutes: location.timezone_offset,
            imsak_offset_minutes: location.imsak_offset_minutes,
        })
    }

    /// Timetable for `date`, labelled with observance day `day`.
    pub fn compute(&self, day: i64, date: NaiveDate) -> Result<ImsakiyahTime> {
        let coords = Coordinates::new(self.lat, self.lng);
        let method = parse_method(&self.method_str)?;
        let madhab = parse_madhab(&self.madhab_str)?;
        let params = Configuration::with(method, madhab);

        let times = PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
            .map_err(|e| anyhow!("Prayer calculation failed: {}", e))?;

        let offset = self
            .tz_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| anyhow!("Invalid timezone offset: {}", self.tz_offset_minutes))?;

        let to_local = |utc: chrono::DateTime<chrono::Utc>| -> NaiveTime {
            utc.with_timezone(&offset).time()
        };
        let fmt = |t: NaiveTime| t.format("%H:%M").to_string();

        let subuh = to_local(times.time(Prayer::Fajr));
        let imsak = subuh - Duration::minutes(self.imsak_offset_minutes);

        Ok(ImsakiyahTime {
            day,
            imsak: fmt(imsak),
            subuh: fmt(subuh),
            dzuhur: fmt(to_local(times.time(Prayer::Dhuhr))),
            ashar: fmt(to_local(times.time(Prayer::Asr))),
            maghrib: fmt(to_local(times.time(Prayer::Maghrib))),
            isya: fmt(to_local(times.time(Prayer::Isha))),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimesSource {
    Computed,
    Table,
}

/// Prayer times for the tracked day: computed for the configured location
/// when possible, otherwise the built-in Jakarta table.
pub fn resolve_times(
    location: Option<&LocationConfig>,
    day: i64,
    date: NaiveDate,
) -> (ImsakiyahTime, TimesSource) {
    let Some(location) = location else {
        return (imsakiyah_for_day(day), TimesSource::Table);
    };
    match PrayerCalculator::new(location).and_then(|calc| calc.compute(day, date)) {
        Ok(times) => (times, TimesSource::Computed),
        Err(e) => {
            log::warn!("Falling back to built-in timetable: {}", e);
            (imsakiyah_for_day(day), TimesSource::Table)
        }
    }
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(anyhow!("Unknown calculation method: '{}'", s)),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(anyhow!("Unknown madhab: '{}'", s)),
    }
}
