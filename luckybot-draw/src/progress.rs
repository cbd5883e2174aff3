use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearProgress {
    /// Elapsed share of the year, 0..100.
    pub percent: f64,
    /// Whole days until next New Year, rounded up.
    pub days_left: i64,
}

impl YearProgress {
    pub fn message(&self) -> String {
        format!(
            "Year Progress: {:.5}%\nDays Left: {}",
            self.percent, self.days_left
        )
    }
}

pub fn year_progress(now: NaiveDateTime) -> YearProgress {
    let start = start_of_year(now.year());
    let end = start_of_year(now.year() + 1);

    let total = (end - start).num_milliseconds() as f64 / MS_PER_DAY;
    let passed = (now - start).num_milliseconds() as f64 / MS_PER_DAY;
    let remaining = (end - now).num_milliseconds() as f64 / MS_PER_DAY;

    YearProgress {
        percent: passed / total * 100.0,
        days_left: remaining.ceil() as i64,
    }
}

/// Days left in the year of `today`, `today` included.
pub fn days_remaining(today: NaiveDate) -> u32 {
    let last = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
    (last - today).num_days().max(0) as u32 + 1
}

fn start_of_year(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap_or_default()
        .and_time(chrono::NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_year() {
        let progress = year_progress(at(2025, 1, 1, 0));
        assert_eq!(progress.days_left, 365);
        assert_eq!(progress.message(), "Year Progress: 0.00000%\nDays Left: 365");
    }

    #[test]
    fn test_midpoint() {
        let progress = year_progress(at(2025, 7, 2, 12));
        assert_eq!(progress.message(), "Year Progress: 50.00000%\nDays Left: 183");
    }

    #[test]
    fn test_leap_year_length() {
        let progress = year_progress(at(2024, 12, 31, 0));
        assert_eq!(progress.days_left, 1);
        assert!((progress.percent - 365.0 / 366.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_days_remaining() {
        let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
        assert_eq!(days_remaining(day(12, 31)), 1);
        assert_eq!(days_remaining(day(1, 1)), 365);
    }
}
