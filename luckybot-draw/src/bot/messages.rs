//! Chat-facing texts of the command surface.

use crate::chances::Chance;
use crate::error::DrawError;
use crate::game::GameVariant;
use chrono::NaiveDate;
use luckybot_core::Participant;

pub const BUSY: &str = "⏳ Another draw is in progress for this chat, please wait.";
pub const NO_PARTICIPANTS: &str = "No participants yet!";
pub const UPDATING_POINTS: &str = "📊 Updating points...";
pub const GOAT: &str = "🎉 We have a GOAT winner!";
pub const NOTHING_MISSING: &str = "✅ No missing results!";
pub const PONG: &str = "Pong!";

pub fn already_registered(participant: &Participant) -> String {
    format!("{} is already registered!", participant.mention())
}

pub fn registered(participant: &Participant) -> String {
    format!("{} successfully registered!", participant.mention())
}

pub fn luck_is_over(winner: &Participant) -> String {
    format!("The luck is over! {} got it all!", winner.mention())
}

pub fn found_participants(count: usize) -> String {
    format!("👥 Found {} participants in the game!", count)
}

pub fn participant_list(participants: &[Participant]) -> String {
    let mut text = String::from("*Participants:*");
    for participant in participants {
        text.push_str(&format!(
            "\n• {} - {} points",
            participant.mention(),
            participant.points
        ));
    }
    text
}

pub fn lucky_winner(winner: &Participant) -> String {
    format!("Luck is on {}'s side today!", winner.mention())
}

pub fn goat_caption(winner: &Participant) -> String {
    format!("Luck is on {}'s side today! 🐐🐐🐐", winner.mention())
}

pub fn points_update(winner: &Participant) -> String {
    format!("📈 {} now has {} points!", winner.mention(), winner.points)
}

pub fn replaying(missing: usize, date: &str, variant: GameVariant) -> String {
    format!(
        "🔍 Found {} missing results, replaying {} ({})...",
        missing, date, variant
    )
}

pub fn ranking(participants: &[Participant]) -> String {
    let mut text = String::from("*Ranking:*");
    for (i, participant) in participants.iter().enumerate() {
        text.push_str(&format!(
            "\n{}. {} - {} points",
            i + 1,
            participant.mention(),
            participant.points
        ));
    }
    text
}

pub fn schedule(days: &[(NaiveDate, GameVariant)]) -> String {
    let mut text = String::from("*Games Schedule:*");
    for (date, variant) in days {
        text.push_str(&format!("\n{}: {}", date.format("%A, %B %-d"), variant));
    }
    text
}

pub fn chances(chances: &[Chance]) -> String {
    let mut text = String::from("*Winning chances:*");
    for chance in chances {
        text.push_str(&format!(
            "\n{} - {:.2}%",
            chance.participant.name,
            chance.probability * 100.0
        ));
    }
    text
}

pub fn failure(error: &DrawError) -> String {
    format!("❌ Something went wrong... {}", error)
}
