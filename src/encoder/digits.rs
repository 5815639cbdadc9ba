//! Decimal digit formatting for the date, filler and serial parts

use chrono::{Datelike, NaiveDateTime};

use crate::error::{DateSerialError, Result};

/// Format the date part: year, month, day and optionally hour and minute
pub(crate) fn date_digits(
    date: &NaiveDateTime,
    two_digit_year: bool,
    include_time: bool,
) -> Result<String> {
    if !two_digit_year && !(0..=9999).contains(&date.year()) {
        return Err(DateSerialError::UnsupportedYear { year: date.year() });
    }
    let pattern = match (two_digit_year, include_time) {
        (true, false) => "%y%m%d",
        (true, true) => "%y%m%d%H%M",
        (false, false) => "%Y%m%d",
        (false, true) => "%Y%m%d%H%M",
    };
    Ok(date.format(pattern).to_string())
}

/// Concatenate the date digits, the filler (when non-zero) and the serial,
/// zero-padding filler and serial to the given widths
pub(crate) fn assemble(
    date: &str,
    filler: i64,
    filler_width: usize,
    serial: i64,
    serial_width: usize,
) -> String {
    if filler > 0 {
        format!("{date}{filler:0filler_width$}{serial:0serial_width$}")
    } else {
        format!("{date}{serial:0serial_width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_date_digit_patterns() {
        let date = at(2025, 5, 11, 22, 7);
        assert_eq!(date_digits(&date, true, false).unwrap(), "250511");
        assert_eq!(date_digits(&date, true, true).unwrap(), "2505112207");
        assert_eq!(date_digits(&date, false, false).unwrap(), "20250511");
        assert_eq!(date_digits(&date, false, true).unwrap(), "202505112207");
    }

    #[test]
    fn test_two_digit_year_keeps_leading_zero() {
        let date = at(2005, 1, 2, 3, 4);
        assert_eq!(date_digits(&date, true, true).unwrap(), "0501020304");
    }

    #[test]
    fn test_full_year_pads_small_years() {
        let date = at(987, 1, 1, 0, 0);
        assert_eq!(date_digits(&date, false, false).unwrap(), "09870101");
    }

    #[test]
    fn test_full_year_out_of_range() {
        let date = at(10_000, 1, 1, 0, 0);
        assert_eq!(
            date_digits(&date, false, false).unwrap_err(),
            DateSerialError::UnsupportedYear { year: 10_000 }
        );
        // the two-digit year of the same date is still fine
        assert_eq!(date_digits(&date, true, false).unwrap(), "000101");
    }

    #[test]
    fn test_assemble() {
        assert_eq!(assemble("250511", 0, 4, 102, 4), "2505110102");
        assert_eq!(assemble("250511", 1100, 4, 5, 4), "25051111000005");
        assert_eq!(assemble("250511", 7, 4, 12_345, 4), "250511000712345");
        assert_eq!(assemble("250511", 0, 0, 5, 13), "2505110000000000005");
    }
}
