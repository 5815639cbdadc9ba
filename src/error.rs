use thiserror::Error;

/// Represents errors that can occur while encoding a date-based serial
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateSerialError {
    /// Error when the serial is negative
    #[error("Serial {serial} is invalid. Serials must not be negative")]
    NegativeSerial { serial: i64 },
    /// Error when the filler is negative
    #[error("Filler {filler} is invalid. Fillers must not be negative")]
    NegativeFiller { filler: i64 },
    /// Error when a four-digit year cannot be written in four digits
    #[error("Year {year} cannot be written as a four-digit year")]
    UnsupportedYear { year: i32 },
    /// Error when the serial does not fit in the digits left after date and filler
    #[error("Serial {serial} does not fit in the {max_len} digits left of the `int64` budget")]
    SerialOverflow { serial: i64, max_len: i32 },
    /// Error when the assembled digits cannot be represented as an `i64`
    #[error("Generated serial {digits} exceeds the maximum value of `int64` {max}")]
    EncodingOverflow { digits: String, max: i64 },
    /// Error when a random serial range is empty or starts below zero
    #[error("Serial range [{min}, {max}) is invalid. It must be non-empty and start at zero or above")]
    InvalidSerialRange { min: i64, max: i64 },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DateSerialError>;
