//! Chainable toggles for `EncodingRequest`

use super::{EncodingRequest, SerialPadding};
use crate::error::{DateSerialError, Result};

/// Default configuration values
pub const DEFAULT_INCLUDE_TIME: bool = false;
pub const DEFAULT_TWO_DIGIT_YEAR: bool = true;
pub const DEFAULT_FILLER: i64 = 0; // 0 omits the filler
pub const DEFAULT_PADDING: SerialPadding = SerialPadding::Fixed;

impl EncodingRequest {
    /// Append hour and minute (`HHmm`) to the date digits
    pub const fn with_time(mut self) -> Self {
        self.include_time = true;
        self
    }

    /// Use the full four-digit year
    pub const fn with_full_year(mut self) -> Self {
        self.two_digit_year = false;
        self
    }

    /// Use the two-digit year (the default)
    pub const fn with_short_year(mut self) -> Self {
        self.two_digit_year = true;
        self
    }

    /// Set a filler or identifier separating the date from the serial.
    /// A filler of 0 omits it.
    pub fn with_filler(mut self, filler: i64) -> Result<Self> {
        if filler < 0 {
            return Err(DateSerialError::NegativeFiller { filler });
        }
        self.filler = filler;
        Ok(self)
    }

    /// Choose how the filler and serial are padded on assembly
    pub const fn with_padding(mut self, padding: SerialPadding) -> Self {
        self.padding = padding;
        self
    }
}
