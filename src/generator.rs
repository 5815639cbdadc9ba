//! One-shot facade applying the default serial range and filler

use chrono::NaiveDateTime;

use crate::config::EncodingRequest;
use crate::error::{DateSerialError, Result};
use crate::source::SerialSource;

/// Convenience entry points over [`crate::SerialEncoder`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DateSerialGenerator;

impl DateSerialGenerator {
    pub const DEFAULT_MIN_SERIAL: i64 = 1;
    pub const DEFAULT_MAX_SERIAL: i64 = 999;
    pub const DEFAULT_FILLER: i64 = 1100;

    /// Generate an id for `date` with a random serial in `[1, 999)` and filler 1100
    ///
    /// # Arguments
    ///
    /// * `date` - Date (and time) the id is based on
    /// * `source` - Where the random serial comes from
    pub fn quick_generate<S>(date: NaiveDateTime, source: &S) -> Result<i64>
    where
        S: SerialSource + ?Sized,
    {
        Self::quick_generate_in(
            date,
            Self::DEFAULT_MIN_SERIAL,
            Self::DEFAULT_MAX_SERIAL,
            source,
        )
    }

    /// Generate an id for `date` with a random serial in `[min_serial, max_serial)` and filler 1100
    pub fn quick_generate_in<S>(
        date: NaiveDateTime,
        min_serial: i64,
        max_serial: i64,
        source: &S,
    ) -> Result<i64>
    where
        S: SerialSource + ?Sized,
    {
        Self::get_generator(date, min_serial, max_serial, source)?
            .with_filler(Self::DEFAULT_FILLER)?
            .generate()
    }

    /// Build a request with a random serial in `[min_serial, max_serial)`
    /// and default flags, for the caller to configure further
    pub fn get_generator<S>(
        date: NaiveDateTime,
        min_serial: i64,
        max_serial: i64,
        source: &S,
    ) -> Result<EncodingRequest>
    where
        S: SerialSource + ?Sized,
    {
        if min_serial < 0 || min_serial >= max_serial {
            return Err(DateSerialError::InvalidSerialRange {
                min: min_serial,
                max: max_serial,
            });
        }
        let serial = source.serial_in(min_serial..max_serial);
        EncodingRequest::new(date, serial)
    }
}
