use crate::channel::GameChannel;
use crate::error::{DrawError, Result};
use crate::game::GameVariant;
use crate::narration;
use crate::outcome::{simulate, Outcome};
use luckybot_core::Participant;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub participant: Participant,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based position within the tournament.
    pub number: usize,
    pub variant: GameVariant,
    pub turns: Vec<Turn>,
    pub survivors: Vec<Participant>,
    /// Threshold round in which nobody scored.
    pub void: bool,
}

/// Play one round: a roll and an announcement per entrant, in input order,
/// then narrow the field with the variant's selection policy.
pub async fn play_round<C>(
    channel: &C,
    variant: GameVariant,
    number: usize,
    entrants: &[Participant],
) -> Result<RoundReport>
where
    C: GameChannel + ?Sized,
{
    if entrants.is_empty() {
        return Err(DrawError::NoParticipants);
    }

    let mut outcomes: Vec<Outcome> = Vec::with_capacity(entrants.len());
    for participant in entrants {
        let value = channel.roll(variant).await?;
        let outcome = simulate(variant, value)?;

        channel
            .announce(&narration::turn(variant, participant, &outcome))
            .await?;
        tracing::debug!(
            "Round {}: {} rolled {} ({})",
            number,
            participant.name,
            value,
            outcome.narration
        );

        outcomes.push(outcome);
        channel.settle().await;
    }

    let selection = variant.rules().policy.select(&outcomes);
    let survivors: Vec<Participant> = selection
        .survivors
        .iter()
        .map(|&index| entrants[index].clone())
        .collect();

    let turns = entrants
        .iter()
        .cloned()
        .zip(outcomes)
        .map(|(participant, outcome)| Turn {
            participant,
            outcome,
        })
        .collect();

    tracing::info!(
        "{} round {}: {} of {} entrants go on{}",
        variant.name(),
        number,
        survivors.len(),
        entrants.len(),
        if selection.void { " (void round)" } else { "" }
    );

    Ok(RoundReport {
        number,
        variant,
        turns,
        survivors,
        void: selection.void,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{players, ScriptedChannel};

    #[tokio::test]
    async fn test_basketball_round() {
        let channel = ScriptedChannel::new(&[2, 5, 1, 4]);
        let entrants = players(&["ann", "ben", "cid", "dot"]);

        let report = play_round(&channel, GameVariant::Basketball, 1, &entrants)
            .await
            .unwrap();

        let names: Vec<&str> = report.survivors.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["ben", "dot"]);
        assert!(!report.void);
        assert_eq!(report.turns.len(), 4);
    }

    #[tokio::test]
    async fn test_announcements_follow_input_order() {
        let channel = ScriptedChannel::new(&[1, 6]);
        let entrants = players(&["ann", "ben"]);

        play_round(&channel, GameVariant::Darts, 1, &entrants)
            .await
            .unwrap();

        assert_eq!(
            channel.announcements(),
            vec![
                "🎯 [ann](tg://user?id=1) missed".to_string(),
                "🎯 [ben](tg://user?id=2) scores 6".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_void_threshold_round() {
        let channel = ScriptedChannel::new(&[1, 2]);
        let entrants = players(&["ann", "ben"]);

        let report = play_round(&channel, GameVariant::Football, 2, &entrants)
            .await
            .unwrap();

        assert!(report.void);
        assert_eq!(report.survivors, entrants);
    }

    #[tokio::test]
    async fn test_same_name_players_are_kept_apart() {
        let channel = ScriptedChannel::new(&[3, 5]);
        let entrants = vec![Participant::new(10, "sam"), Participant::new(11, "sam")];

        let report = play_round(&channel, GameVariant::Dice, 1, &entrants)
            .await
            .unwrap();

        assert_eq!(report.survivors, vec![Participant::new(11, "sam")]);
    }

    #[tokio::test]
    async fn test_invalid_roll_fails_loudly() {
        let channel = ScriptedChannel::new(&[9]);
        let entrants = players(&["ann"]);

        let err = play_round(&channel, GameVariant::Dice, 1, &entrants)
            .await
            .unwrap_err();
        assert!(matches!(err, DrawError::InvalidRoll(9)));
    }

    #[tokio::test]
    async fn test_empty_round_is_rejected() {
        let channel = ScriptedChannel::new(&[]);
        let err = play_round(&channel, GameVariant::Dice, 1, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, DrawError::NoParticipants));
    }
}
