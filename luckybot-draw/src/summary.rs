//! Cumulative standings over the stored results of a chat.

use crate::error::{DrawError, Result};
use chrono::NaiveDate;
use luckybot_core::{format_date, parse_date, ResultRecord};
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub id: i64,
    /// Display label; participants sharing a name get their id appended.
    pub name: String,
    /// Running total of wins, one entry per summary date.
    pub cumulative: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn header(&self) -> Vec<String> {
        std::iter::once("username".to_string())
            .chain(self.dates.iter().map(|d| format_date(*d)))
            .collect()
    }

    pub fn write_csv<W: std::io::Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(self.header())?;

        for row in &self.rows {
            let cells = std::iter::once(row.name.clone())
                .chain(row.cumulative.iter().map(u32::to_string));
            writer.write_record(cells)?;
        }

        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        String::from_utf8(buf).map_err(|e| DrawError::internal(format!("CSV is not UTF-8: {}", e)))
    }
}

/// Winners sorted by name, dates ascending, wins accumulated over time.
/// Winners are told apart by id, not by name.
pub fn summarize(records: &[ResultRecord]) -> Result<Summary> {
    let mut wins: HashMap<i64, BTreeMap<NaiveDate, u32>> = HashMap::new();
    let mut names: HashMap<i64, &str> = HashMap::new();
    let mut dates = BTreeSet::new();

    for record in records {
        let date = parse_date(&record.date)?;
        dates.insert(date);
        names
            .entry(record.winner.id)
            .or_insert(record.winner.name.as_str());
        *wins
            .entry(record.winner.id)
            .or_default()
            .entry(date)
            .or_default() += 1;
    }

    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for name in names.values() {
        *name_counts.entry(*name).or_default() += 1;
    }

    let dates: Vec<NaiveDate> = dates.into_iter().collect();
    let mut rows: Vec<SummaryRow> = wins
        .into_iter()
        .map(|(id, by_date)| {
            let mut total = 0;
            let cumulative = dates
                .iter()
                .map(|date| {
                    total += by_date.get(date).copied().unwrap_or(0);
                    total
                })
                .collect();

            let name = names.get(&id).copied().unwrap_or_default();
            let name = if name_counts.get(name).copied().unwrap_or(0) > 1 {
                format!("{}#{}", name, id)
            } else {
                name.to_string()
            };

            SummaryRow {
                id,
                name,
                cumulative,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    Ok(Summary { dates, rows })
}

/// Results won by anyone called one of `names`, oldest first. Every
/// participant with a matching name is included; the records keep their ids.
pub fn winner_dates(records: &[ResultRecord], names: &[String]) -> Result<Vec<ResultRecord>> {
    let mut won = Vec::new();
    for record in records {
        if names.iter().any(|name| *name == record.winner.name) {
            won.push((parse_date(&record.date)?, record.clone()));
        }
    }

    won.sort_by_key(|(date, _)| *date);
    Ok(won.into_iter().map(|(_, record)| record).collect())
}
