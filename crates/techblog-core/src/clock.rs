//! Render-time clock.
//!
//! The footer shows the current year, which makes page output depend on
//! the date. `Clock::Fixed` pins it for tests and reproducible builds.

use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local system date, read on every call
    #[default]
    System,
    /// A pinned date
    Fixed(NaiveDate),
}

impl Clock {
    /// Clock pinned to January 1st of `year`.
    ///
    /// Returns `None` for years chrono cannot represent.
    pub fn fixed_year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(Clock::Fixed)
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn current_year(&self) -> i32 {
        self.today().year()
    }
}
