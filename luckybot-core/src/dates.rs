//! `DD.MM.YYYY` codec used as the result key.

use crate::error::{LuckyError, Result};
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

/// Parse a zero-padded `DD.MM.YYYY` string. Anything looser is rejected.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !well_formed {
        return Err(LuckyError::invalid_date(format!(
            "'{}' is not DD.MM.YYYY",
            value
        )));
    }

    let number = |range: std::ops::Range<usize>| -> u32 {
        value[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };

    NaiveDate::from_ymd_opt(number(6..10) as i32, number(3..5), number(0..2))
        .ok_or_else(|| LuckyError::invalid_date(format!("'{}' is not a calendar date", value)))
}
