//! # Sentence Content
//!
//! Strongly-typed records for the GGA and RMC sentences, the per-sentence
//! field state machines that fill them, and the small value types they share.

mod parse;
mod sentences;

pub use sentences::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// UTC time of day as transmitted in an `hhmmss.sss` field.
///
/// Each component is two decimal digits and is not range-checked: `99` is a
/// perfectly acceptable hour as far as the decoder is concerned. Fractional
/// seconds are dropped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// UTC date as transmitted in a `ddmmyy` field.
///
/// Like [`TimeOfDay`], the components are not range-checked and the year
/// keeps its two-digit form.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

#[cfg(feature = "time")]
impl TimeOfDay {
    /// Converts to a [`time::Time`], `None` if a component is out of range.
    ///
    /// ```rust
    /// use nmea0183_fix::nmea_content::TimeOfDay;
    ///
    /// let time = TimeOfDay { hours: 10, minutes: 26, seconds: 4 };
    /// assert_eq!(time.to_time(), time::Time::from_hms(10, 26, 4).ok());
    ///
    /// let time = TimeOfDay { hours: 24, minutes: 0, seconds: 0 };
    /// assert_eq!(time.to_time(), None);
    /// ```
    pub fn to_time(&self) -> Option<time::Time> {
        time::Time::from_hms(self.hours, self.minutes, self.seconds).ok()
    }
}

#[cfg(feature = "time")]
impl Date {
    /// Converts to a [`time::Date`], `None` if the date does not exist.
    ///
    /// Two-digit years `83` to `99` are taken as 1983 to 1999, everything
    /// else as 20xx.
    pub fn to_date(&self) -> Option<time::Date> {
        let month = time::Month::try_from(self.month).ok()?;

        let year = match self.year {
            83..=99 => 1900 + self.year as i32,
            _ => 2000 + self.year as i32,
        };

        time::Date::from_calendar_date(year, month, self.day).ok()
    }
}
