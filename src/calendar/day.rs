use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::calendar::RAMADAN_DAYS;

/// Default hour at which the tracked date moves to the next day.
pub const DEFAULT_ROLLOVER_HOUR: u32 = 18;

/// How a wall-clock instant maps onto a tracked date and observance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPolicy {
    /// Day follows the calendar date, clamped to `1..=30`.
    Calendar,
    /// From `hour` onwards the instant belongs to the next date, as the
    /// Islamic day begins at maghrib. Not clamped.
    EveningRollover { hour: u32 },
}

impl Default for DayPolicy {
    fn default() -> Self {
        DayPolicy::EveningRollover {
            hour: DEFAULT_ROLLOVER_HOUR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDay {
    /// Date whose entry is being tracked.
    pub date: NaiveDate,
    /// Observance day, 1-based. Below 1 or above 30 outside the month.
    pub day: i64,
}

impl ResolvedDay {
    pub fn phase(&self) -> Phase {
        if self.day < 1 {
            Phase::NotStarted
        } else if self.day > RAMADAN_DAYS {
            Phase::Finished
        } else {
            Phase::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == Phase::Active
    }

    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn label(&self) -> String {
        match self.phase() {
            Phase::Active => format!("Hari ke-{}", self.day),
            Phase::NotStarted => "Ramadhan belum dimulai".to_string(),
            Phase::Finished => "Ramadhan telah berakhir".to_string(),
        }
    }

    /// Days left after today, never negative.
    pub fn remaining_days(&self) -> i64 {
        crate::models::stats::remaining_days(self.day)
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Resolve the tracked date and observance day for a local instant.
pub fn resolve(now: NaiveDateTime, start: NaiveDate, policy: DayPolicy) -> ResolvedDay {
    match policy {
        DayPolicy::Calendar => {
            let date = now.date();
            let day = (date - start).num_days() + 1;
            ResolvedDay {
                date,
                day: day.clamp(1, RAMADAN_DAYS),
            }
        }
        DayPolicy::EveningRollover { hour } => {
            let today = now.date();
            let date = if now.hour() >= hour {
                today + Duration::days(1)
            } else {
                today
            };
            ResolvedDay {
                date,
                day: (date - start).num_days() + 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    const ROLLOVER: DayPolicy = DayPolicy::EveningRollover { hour: 18 };

    #[test]
    fn test_first_day_morning() {
        let resolved = resolve(at(2026, 2, 19, 5, 0), start(), ROLLOVER);
        assert_eq!(resolved.day, 1);
        assert_eq!(resolved.date_key(), "2026-02-19");
        assert_eq!(resolved.phase(), Phase::Active);
    }

    #[test]
    fn test_evening_rolls_to_next_date() {
        let resolved = resolve(at(2026, 2, 19, 18, 0), start(), ROLLOVER);
        assert_eq!(resolved.day, 2);
        assert_eq!(resolved.date_key(), "2026-02-20");
    }

    #[test]
    fn test_last_day_boundary() {
        // Start + 29 days is 2026-03-20.
        let before = resolve(at(2026, 3, 20, 17, 59), start(), ROLLOVER);
        assert_eq!(before.day, 30);
        assert!(before.is_active());

        let after = resolve(at(2026, 3, 20, 18, 1), start(), ROLLOVER);
        assert_eq!(after.day, 31);
        assert_eq!(after.phase(), Phase::Finished);
        assert_eq!(after.date_key(), "2026-03-21");
    }

    #[test]
    fn test_before_start_is_not_clamped() {
        for hour in [0, 9, 17] {
            let resolved = resolve(at(2026, 2, 18, hour, 30), start(), ROLLOVER);
            assert_eq!(resolved.day, 0);
            assert_eq!(resolved.phase(), Phase::NotStarted);
        }
        let week_before = resolve(at(2026, 2, 12, 8, 0), start(), ROLLOVER);
        assert_eq!(week_before.day, -6);
    }

    #[test]
    fn test_eve_of_ramadan_becomes_day_one() {
        let resolved = resolve(at(2026, 2, 18, 19, 0), start(), ROLLOVER);
        assert_eq!(resolved.day, 1);
        assert_eq!(resolved.date_key(), "2026-02-19");
    }

    #[test]
    fn test_time_of_day_does_not_shift_difference() {
        let early = resolve(at(2026, 3, 1, 0, 0), start(), ROLLOVER);
        let late = resolve(at(2026, 3, 1, 17, 59), start(), ROLLOVER);
        assert_eq!(early, late);
        assert_eq!(early.day, 11);
    }

    #[test]
    fn test_calendar_policy_clamps() {
        let before = resolve(at(2026, 2, 1, 20, 0), start(), DayPolicy::Calendar);
        assert_eq!(before.day, 1);
        assert_eq!(before.date_key(), "2026-02-01");

        let evening = resolve(at(2026, 2, 19, 20, 0), start(), DayPolicy::Calendar);
        assert_eq!(evening.day, 1);
        assert_eq!(evening.date_key(), "2026-02-19");

        let after = resolve(at(2026, 4, 1, 8, 0), start(), DayPolicy::Calendar);
        assert_eq!(after.day, 30);
    }

    #[test]
    fn test_labels_per_phase() {
        assert_eq!(resolve(at(2026, 2, 10, 8, 0), start(), ROLLOVER).label(), "Ramadhan belum dimulai");
        assert_eq!(resolve(at(2026, 2, 23, 8, 0), start(), ROLLOVER).label(), "Hari ke-5");
        assert_eq!(resolve(at(2026, 3, 21, 8, 0), start(), ROLLOVER).label(), "Ramadhan telah berakhir");
    }

    #[test]
    fn test_remaining_days() {
        assert_eq!(resolve(at(2026, 2, 19, 8, 0), start(), ROLLOVER).remaining_days(), 29);
        assert_eq!(resolve(at(2026, 3, 25, 8, 0), start(), ROLLOVER).remaining_days(), 0);
    }
}
