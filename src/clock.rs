use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Abstraction over "current time" to make behavior deterministic in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Calendar year of `today()`.
    fn current_year(&self) -> i32 {
        self.today().year()
    }

    /// Zero-based month index of `today()` (0 = January), as the period
    /// selector counts months.
    fn current_month_index(&self) -> u32 {
        self.today().month0()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_reports_year_and_month_index() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap());
        assert_eq!(clock.current_year(), 2024);
        assert_eq!(clock.current_month_index(), 2);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }
}
