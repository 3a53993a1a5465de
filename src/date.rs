use chrono::{Datelike, Local};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const JANUARY: i32 = 1;
const FEBRUARY: i32 = 2;
const DECEMBER: i32 = 12;
const FIRST_DAY_OF_MONTH: i32 = 1;
const DATE_COMPONENTS: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected mm/dd/yyyy, found '{0}'")]
    Format(String),
    #[error("date component '{0}' is not a number")]
    Component(String),
}

/// A calendar date as entered by a caller. Validity is not enforced on
/// construction; ask [`Date::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(now.year(), now.month() as i32, now.day() as i32)
    }

    fn is_leap_year(&self) -> bool {
        self.year % 4 == 0 && (self.year % 100 != 0 || self.year % 400 == 0)
    }

    fn days_in_month(&self) -> i32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            FEBRUARY if self.is_leap_year() => 29,
            FEBRUARY => 28,
            _ => 31,
        }
    }

    pub fn is_valid(&self) -> bool {
        if !(JANUARY..=DECEMBER).contains(&self.month) {
            return false;
        }

        (FIRST_DAY_OF_MONTH..=self.days_in_month()).contains(&self.day)
    }

    /// Whole years elapsed between this date and `today`, counting only
    /// birthdays that have already been reached. Saturates at the `i32`
    /// bounds for far-off years.
    pub fn age_on(&self, today: &Date) -> i32 {
        let age = today.year.saturating_sub(self.year);
        if (today.month, today.day) < (self.month, self.day) {
            return age.saturating_sub(1);
        }

        age
    }

    pub fn age(&self) -> i32 {
        self.age_on(&Date::today())
    }

    pub fn is_on_or_after(&self, today: &Date) -> bool {
        self.compare(today) != Ordering::Less
    }

    pub fn is_today_or_future(&self) -> bool {
        self.is_on_or_after(&Date::today())
    }

    pub fn compare(&self, other: &Date) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.year)
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    /// Parses `mm/dd/yyyy`. Out-of-range components are accepted here and
    /// rejected later by [`Date::is_valid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.trim().split('/').collect();
        if components.len() != DATE_COMPONENTS {
            return Err(DateParseError::Format(s.to_owned()));
        }

        let mut numbers = [0i32; DATE_COMPONENTS];
        for (number, component) in numbers.iter_mut().zip(&components) {
            *number = component
                .trim()
                .parse()
                .map_err(|_| DateParseError::Component((*component).to_owned()))?;
        }

        let [month, day, year] = numbers;
        Ok(Date::new(year, month, day))
    }
}
