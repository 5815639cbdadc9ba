//! Digit budget for the serial
//!
//! Splits the 19 decimal digits of `i64::MAX` between the date, the filler
//! and the serial

use crate::config::SerialPadding;

/// Digits claimed by each part of an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitBudget {
    date_len: usize,
    filler_len: usize,
    max_serial_len: i32,
}

impl DigitBudget {
    /// Reserve date and filler digits out of `total`, leaving the rest to the serial
    #[inline]
    pub(crate) fn new(total: usize, date_len: usize, filler_len: usize) -> Self {
        Self {
            date_len,
            filler_len,
            max_serial_len: total as i32 - date_len as i32 - filler_len as i32,
        }
    }

    /// Length of the date digits
    #[inline(always)]
    pub const fn date_len(&self) -> usize {
        self.date_len
    }

    /// Digits reserved for the filler, 0 when there is none
    #[inline(always)]
    pub const fn filler_len(&self) -> usize {
        self.filler_len
    }

    /// Digits left for the serial; zero or negative when nothing is left
    #[inline(always)]
    pub const fn max_serial_len(&self) -> i32 {
        self.max_serial_len
    }

    /// Whether `serial` can be written in the digits left
    pub fn fits(&self, serial: i64) -> bool {
        if self.max_serial_len <= 0 {
            return false;
        }
        10i64
            .checked_pow(self.max_serial_len as u32)
            .is_none_or(|limit| serial < limit)
    }
}

/// Number of decimal digits in `n`; 0 for zero and negative values
#[inline]
pub(crate) fn decimal_len(n: i64) -> usize {
    n.checked_ilog10().map_or(0, |d| d as usize + 1)
}

/// Digits the filler claims from the budget under the given padding
#[inline]
pub(crate) fn filler_width(filler: i64, padding: SerialPadding, field_width: usize) -> usize {
    let digits = decimal_len(filler);
    match padding {
        _ if digits == 0 => 0,
        SerialPadding::Fixed => digits,
        SerialPadding::Budget => digits.max(field_width),
    }
}
