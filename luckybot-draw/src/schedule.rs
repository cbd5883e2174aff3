use crate::game::GameVariant;
use chrono::{Datelike, NaiveDate};

/// Game played on `date`: zero-based day of the year modulo the rotation length.
pub fn game_for_date(date: NaiveDate) -> GameVariant {
    let rotation = &GameVariant::SCHEDULE;
    rotation[date.ordinal0() as usize % rotation.len()]
}

/// `days` consecutive dates starting at `start`, with their games.
pub fn upcoming(start: NaiveDate, days: u32) -> Vec<(NaiveDate, GameVariant)> {
    start
        .iter_days()
        .take(days as usize)
        .map(|date| (date, game_for_date(date)))
        .collect()
}
