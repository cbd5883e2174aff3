//! Daily chat lottery
//!
//! Registered participants of a chat compete once per day. The winner is
//! decided by a short elimination tournament of the game scheduled for the
//! date (darts, bowling, basketball, football or dice), or by a single fair
//! pick. Days without a result can be replayed later with the game that was
//! scheduled for them.

pub mod bot;
pub mod chances;
pub mod channel;
pub mod error;
pub mod game;
pub mod gaps;
pub mod lottery;
pub mod narration;
pub mod outcome;
pub mod progress;
pub mod rng;
pub mod round;
pub mod schedule;
pub mod summary;
pub mod tournament;

#[cfg(test)]
mod testing;

pub use bot::{Command, LuckyBot};
pub use chances::{project, Chance};
pub use channel::{ChatChannel, GameChannel};
pub use error::{DrawError, Result};
pub use game::{GameRules, GameVariant, Scoring, Selection, SelectionPolicy};
pub use gaps::{find_missing_dates, missing_days};
pub use lottery::random_pick;
pub use outcome::{simulate, Outcome};
pub use progress::{days_remaining, year_progress, YearProgress};
pub use rng::FairRandom;
pub use round::{play_round, RoundReport, Turn};
pub use schedule::{game_for_date, upcoming};
pub use summary::{summarize, winner_dates, Summary, SummaryRow};
pub use tournament::{resolve, Phase, TournamentReport};
