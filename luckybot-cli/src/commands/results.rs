use chrono::Local;
use clap::Subcommand;
use comfy_table::{presets::UTF8_FULL, Table};
use luckybot_core::{format_date, parse_date, BotConfig, ChatId, LuckyError, ResultStore, Storage};
use luckybot_draw::{game_for_date, missing_days, summarize, winner_dates, Result};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ResultsCommands {
    /// Export cumulative wins per participant as CSV
    Export {
        /// Chat to export
        #[arg(long, default_value_t = 1)]
        chat: i64,
        /// Write the CSV here instead of printing a table
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List the days won by the given participants
    Wins {
        /// Chat to search
        #[arg(long, default_value_t = 1)]
        chat: i64,
        /// Winner name, may be repeated
        #[arg(long = "name", required = true)]
        names: Vec<String>,
    },
    /// List days without a stored result
    Gaps {
        /// Chat to check
        #[arg(long, default_value_t = 1)]
        chat: i64,
        /// Last day to check (DD.MM.YYYY), defaults to today
        #[arg(long)]
        until: Option<String>,
    },
}

pub async fn handle_results_command(
    cmd: ResultsCommands,
    storage: &Storage,
    config: &BotConfig,
) -> Result<()> {
    match cmd {
        ResultsCommands::Export { chat, out } => {
            let records = ResultStore::new(storage).list(ChatId(chat)).await?;
            if records.is_empty() {
                println!("No results stored for chat {}", chat);
                return Ok(());
            }

            let summary = summarize(&records)?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, summary.to_csv()?)
                        .await
                        .map_err(LuckyError::from)?;
                    println!(
                        "Exported {} participants over {} days to {}",
                        summary.rows.len(),
                        summary.dates.len(),
                        path.display()
                    );
                }
                None => {
                    let mut table = Table::new();
                    table.load_preset(UTF8_FULL);
                    table.set_header(summary.header());
                    for row in &summary.rows {
                        let mut cells = vec![row.name.clone()];
                        cells.extend(row.cumulative.iter().map(u32::to_string));
                        table.add_row(cells);
                    }
                    println!("{}", table);
                }
            }
        }

        ResultsCommands::Wins { chat, names } => {
            let records = ResultStore::new(storage).list(ChatId(chat)).await?;
            let won = winner_dates(&records, &names)?;

            if won.is_empty() {
                println!("No wins for {}", names.join(", "));
                return Ok(());
            }

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Date", "Id", "Winner", "Points before"]);
            for record in &won {
                table.add_row(vec![
                    record.date.clone(),
                    record.winner.id.to_string(),
                    record.winner.name.clone(),
                    record.winner.points.to_string(),
                ]);
            }
            println!("{}", table);
        }

        ResultsCommands::Gaps { chat, until } => {
            let until = match until {
                Some(day) => parse_date(&day)?,
                None => Local::now().date_naive(),
            };

            let records = ResultStore::new(storage).list(ChatId(chat)).await?;
            let gaps = missing_days(records.iter().map(|r| r.date.as_str()), config.epoch, until);

            if gaps.is_empty() {
                println!("No missing results for chat {}", chat);
                return Ok(());
            }

            println!("{} days without a result:", gaps.len());
            for day in gaps {
                println!("  {}  {}", format_date(day), game_for_date(day));
            }
        }
    }

    Ok(())
}
