//! Date-based serial encoder
//!
//! Split into modules for testability:
//! - `budget` - How many digits the serial may occupy
//! - `digits` - Date, filler and serial formatting

mod budget;
mod digits;

pub use budget::DigitBudget;

use chrono::NaiveDateTime;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::config::{EncodingRequest, SerialPadding};
use crate::error::{DateSerialError, Result};

use budget::filler_width;
use digits::{assemble, date_digits};

/// Packs a date, a filler and a serial into a single `i64`
///
/// The id is the decimal concatenation `date | filler | serial`, e.g.
/// `yyMMdd` + `1100` + `0005` = `25051111000005`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialEncoder;

impl SerialEncoder {
    /// Decimal length of `i64::MAX`
    pub const MAX_DIGITS: usize = 19;
    /// Width the filler and serial are zero-padded to
    pub const FIELD_WIDTH: usize = 4;

    /// Create a request with default flags
    pub fn configure(date: NaiveDateTime, serial: i64) -> Result<EncodingRequest> {
        EncodingRequest::new(date, serial)
    }

    /// Compute the digit budget of a request without assembling it
    pub fn budget(request: &EncodingRequest) -> Result<DigitBudget> {
        let date = date_digits(
            &request.date(),
            request.two_digit_year(),
            request.include_time(),
        )?;
        Ok(Self::budget_for(&date, request))
    }

    fn budget_for(date: &str, request: &EncodingRequest) -> DigitBudget {
        let filler_len = filler_width(request.filler(), request.padding(), Self::FIELD_WIDTH);
        DigitBudget::new(Self::MAX_DIGITS, date.len(), filler_len)
    }

    /// Encode a request into an `i64`
    ///
    /// # Returns
    /// * `Result<i64, DateSerialError>` - The id, or a range error if the
    ///   serial or the assembled digits do not fit in an `i64`
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(request)))]
    pub fn generate(request: &EncodingRequest) -> Result<i64> {
        let result = Self::encode(request);
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(error = %err, "serial encoding failed");
        }
        result
    }

    fn encode(request: &EncodingRequest) -> Result<i64> {
        let date = date_digits(
            &request.date(),
            request.two_digit_year(),
            request.include_time(),
        )?;
        let budget = Self::budget_for(&date, request);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            date_len = budget.date_len(),
            filler_len = budget.filler_len(),
            max_serial_len = budget.max_serial_len(),
            "allowed serial length"
        );

        let serial = request.serial();
        if !budget.fits(serial) {
            return Err(DateSerialError::SerialOverflow {
                serial,
                max_len: budget.max_serial_len(),
            });
        }

        let (filler_width, serial_width) = match request.padding() {
            SerialPadding::Fixed => (Self::FIELD_WIDTH, Self::FIELD_WIDTH),
            // fits() guarantees max_serial_len > 0
            SerialPadding::Budget => (budget.filler_len(), budget.max_serial_len() as usize),
        };
        let digits = assemble(&date, request.filler(), filler_width, serial, serial_width);

        match digits.parse::<i64>() {
            Ok(id) => Ok(id),
            Err(_) => Err(DateSerialError::EncodingOverflow {
                digits,
                max: i64::MAX,
            }),
        }
    }
}

impl EncodingRequest {
    /// Compute the digit budget of this request
    pub fn budget(&self) -> Result<DigitBudget> {
        SerialEncoder::budget(self)
    }

    /// Encode this request into an `i64`
    pub fn generate(&self) -> Result<i64> {
        SerialEncoder::generate(self)
    }
}
