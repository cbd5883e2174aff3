//! Announcement texts emitted while a draw is played out.

use crate::game::GameVariant;
use crate::outcome::Outcome;
use luckybot_core::Participant;

pub fn turn(variant: GameVariant, participant: &Participant, outcome: &Outcome) -> String {
    format!(
        "{} {} {}",
        variant.emoji(),
        participant.mention(),
        outcome.narration
    )
}

pub fn tie(variant: GameVariant, survivors: &[Participant]) -> String {
    let mentions: Vec<String> = survivors.iter().map(Participant::mention).collect();
    format!(
        "{} We have a tie between {}! Playing again for them...",
        variant.emoji(),
        mentions.join(", ")
    )
}

pub fn void_round(variant: GameVariant) -> String {
    format!("{} Nobody scored, playing the round again...", variant.emoji())
}

pub fn shuffling(count: usize) -> String {
    format!("🎰 Shuffling {} participants...", count)
}

pub fn winner(participant: &Participant) -> String {
    format!("🎉 And the winner is... {}!", participant.mention())
}
