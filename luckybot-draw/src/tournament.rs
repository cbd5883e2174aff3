use crate::channel::GameChannel;
use crate::error::{DrawError, Result};
use crate::game::GameVariant;
use crate::narration;
use crate::round::{play_round, RoundReport};
use luckybot_core::Participant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    TieBreak,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub variant: GameVariant,
    pub winner: Participant,
    pub rounds: Vec<RoundReport>,
}

/// Play rounds of `variant` until exactly one participant is left.
///
/// Tied or void rounds are replayed among their survivors with fresh rolls.
/// A single participant wins without a round being played.
pub async fn resolve<C>(
    channel: &C,
    variant: GameVariant,
    participants: Vec<Participant>,
) -> Result<TournamentReport>
where
    C: GameChannel + ?Sized,
{
    if participants.is_empty() {
        return Err(DrawError::NoParticipants);
    }

    tracing::info!(
        "Starting {} tournament with {} participants",
        variant.name(),
        participants.len()
    );

    let mut candidates = participants;
    let mut rounds: Vec<RoundReport> = Vec::new();
    let mut phase = Phase::Playing;

    while candidates.len() > 1 {
        let number = rounds.len() + 1;
        let round = play_round(channel, variant, number, &candidates).await?;

        if round.survivors.is_empty() {
            tracing::error!(
                "{} round {} eliminated all {} candidates",
                variant.name(),
                number,
                candidates.len()
            );
            return Err(DrawError::NoSurvivors { round: number });
        }
        if round.survivors.len() > candidates.len() {
            return Err(DrawError::internal(format!(
                "round {} grew the field from {} to {}",
                number,
                candidates.len(),
                round.survivors.len()
            )));
        }

        candidates = round.survivors.clone();

        if candidates.len() > 1 {
            phase = Phase::TieBreak;
            let notice = if round.void {
                narration::void_round(variant)
            } else {
                narration::tie(variant, &candidates)
            };
            channel.announce(&notice).await?;
        }

        tracing::debug!("After round {}: {:?}, {} left", number, phase, candidates.len());
        rounds.push(round);
    }

    let winner = candidates
        .pop()
        .ok_or_else(|| DrawError::internal("tournament ended without a winner"))?;
    phase = Phase::Done;

    channel.announce(&narration::winner(&winner)).await?;
    tracing::info!(
        "{} tournament {:?} after {} rounds, winner: {}",
        variant.name(),
        phase,
        rounds.len(),
        winner.name
    );

    Ok(TournamentReport {
        variant,
        winner,
        rounds,
    })
}
