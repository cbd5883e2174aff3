//! Detection of days without a stored draw.

use chrono::NaiveDate;
use luckybot_core::format_date;
use std::collections::HashSet;

/// Days in `[epoch, today]` whose `DD.MM.YYYY` key is absent from `existing`,
/// oldest first.
pub fn missing_days<'a, I>(existing: I, epoch: NaiveDate, today: NaiveDate) -> Vec<NaiveDate>
where
    I: IntoIterator<Item = &'a str>,
{
    let recorded: HashSet<&str> = existing.into_iter().collect();

    epoch
        .iter_days()
        .take_while(|day| *day <= today)
        .filter(|day| !recorded.contains(format_date(*day).as_str()))
        .collect()
}

/// Same as [`missing_days`], formatted as `DD.MM.YYYY`.
pub fn find_missing_dates<'a, I>(existing: I, epoch: NaiveDate, today: NaiveDate) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    missing_days(existing, epoch, today)
        .into_iter()
        .map(format_date)
        .collect()
}
