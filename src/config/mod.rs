//! Encoding request: the date, serial and layout toggles consumed by the encoder

mod builder;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub use builder::{DEFAULT_FILLER, DEFAULT_INCLUDE_TIME, DEFAULT_PADDING, DEFAULT_TWO_DIGIT_YEAR};

use crate::error::{DateSerialError, Result};

/// How the filler and serial are padded when the digits are assembled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SerialPadding {
    /// Filler and serial are each zero-padded to four digits, whatever the
    /// computed budget. A request can pass the budget check and still fail
    /// to parse as an `i64`.
    #[default]
    Fixed,
    /// The filler takes at least four digits and the serial is padded to
    /// exactly the remaining budget, so every id is 19 digits long.
    Budget,
}

/// A single encoding request
///
/// Values are immutable: every toggle returns a new request, so a base
/// request can be reused freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingRequest {
    date: NaiveDateTime,
    serial: i64,
    include_time: bool,
    two_digit_year: bool,
    filler: i64,
    padding: SerialPadding,
}

impl EncodingRequest {
    /// Create a request with default flags
    ///
    /// # Arguments
    /// * `date` - Date (and time) the serial is based on
    /// * `serial` - Serial appended after the date, must not be negative
    ///
    /// # Returns
    /// * `Result<EncodingRequest, DateSerialError>` - New request or error if serial is negative
    pub fn new(date: NaiveDateTime, serial: i64) -> Result<Self> {
        if serial < 0 {
            return Err(DateSerialError::NegativeSerial { serial });
        }
        Ok(Self {
            date,
            serial,
            include_time: DEFAULT_INCLUDE_TIME,
            two_digit_year: DEFAULT_TWO_DIGIT_YEAR,
            filler: DEFAULT_FILLER,
            padding: DEFAULT_PADDING,
        })
    }

    /// Create a request from a calendar date at midnight
    pub fn from_date(date: NaiveDate, serial: i64) -> Result<Self> {
        Self::new(date.and_time(NaiveTime::MIN), serial)
    }

    /// Create a request from a zoned date-time, using its local wall time
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>, serial: i64) -> Result<Self> {
        Self::new(date.naive_local(), serial)
    }

    #[inline(always)]
    pub const fn date(&self) -> NaiveDateTime {
        self.date
    }

    #[inline(always)]
    pub const fn serial(&self) -> i64 {
        self.serial
    }

    #[inline(always)]
    pub const fn include_time(&self) -> bool {
        self.include_time
    }

    #[inline(always)]
    pub const fn two_digit_year(&self) -> bool {
        self.two_digit_year
    }

    #[inline(always)]
    pub const fn filler(&self) -> i64 {
        self.filler
    }

    #[inline(always)]
    pub const fn padding(&self) -> SerialPadding {
        self.padding
    }
}
