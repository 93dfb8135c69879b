//! Reporting period model
//!
//! A period is an optional (year, month) filter. Either part may be unset,
//! meaning "all years" or "all months". Periods have a human label used in
//! report titles and default export file names.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// An optional (year, month) filter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Period {
    year: Option<i32>,
    month: Option<u32>,
}

impl Period {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: Option<i32>, month: Option<u32>) -> Result<Self, TrackerError> {
        if let Some(m) = month {
            if !(1..=12).contains(&m) {
                return Err(TrackerError::invalid_input(format!(
                    "Month must be between 1 and 12 (got {})",
                    m
                )));
            }
        }
        Ok(Self { year, month })
    }

    /// The unfiltered period
    pub const fn all() -> Self {
        Self {
            year: None,
            month: None,
        }
    }

    /// Every month of one year
    pub const fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            month: None,
        }
    }

    /// One calendar month
    pub fn month_of(year: i32, month: u32) -> Result<Self, TrackerError> {
        Self::new(Some(year), Some(month))
    }

    /// Check whether a date falls inside this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year.map_or(true, |y| date.year() == y)
            && self.month.map_or(true, |m| date.month() == m)
    }

    /// Human label: "January 2024", "2024", "All time"
    pub fn label(&self) -> String {
        match (self.year, self.month) {
            (Some(y), Some(m)) => format!("{} {}", month_name(m), y),
            (Some(y), None) => y.to_string(),
            (None, Some(m)) => format!("{} (all years)", month_name(m)),
            (None, None) => "All time".to_string(),
        }
    }

    /// Label made safe for file names ("January_2024")
    pub fn file_slug(&self) -> String {
        self.label()
            .chars()
            .filter_map(|c| match c {
                ' ' => Some('_'),
                '(' | ')' => None,
                other => Some(other),
            })
            .collect()
    }
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Period {
    type Err = TrackerError;

    /// Parse "all", "2024" or "2024-01"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }

        let invalid = || {
            TrackerError::invalid_input(format!(
                "Invalid period '{}' (expected all, YYYY or YYYY-MM)",
                s
            ))
        };

        match s.split_once('-') {
            Some((y, m)) => {
                let year = y.parse().map_err(|_| invalid())?;
                let month = m.parse().map_err(|_| invalid())?;
                Self::month_of(year, month)
            }
            None => Ok(Self::year(s.parse().map_err(|_| invalid())?)),
        }
    }
}
