use crate::error::{DrawError, Result};
use crate::game::{GameVariant, Scoring};
use serde::{Deserialize, Serialize};

/// One participant's turn, scored and narrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Face reported by the roll, 1..=6.
    pub value: u8,
    pub score: u8,
    pub scored: bool,
    /// Verb phrase following the player's mention, e.g. "scores 5".
    pub narration: String,
}

pub fn simulate(variant: GameVariant, value: u8) -> Result<Outcome> {
    if !(1..=6).contains(&value) {
        return Err(DrawError::InvalidRoll(value));
    }

    let outcome = match variant.rules().scoring {
        Scoring::Face { verb, miss } => match miss {
            Some(missed) if value == 1 => Outcome {
                value,
                score: value,
                scored: false,
                narration: missed.to_string(),
            },
            _ => Outcome {
                value,
                score: value,
                scored: true,
                narration: format!("{} {}", verb, value),
            },
        },
        Scoring::Hit { min_value } => {
            let scored = value >= min_value;
            Outcome {
                value,
                score: u8::from(scored),
                scored,
                narration: if scored { "scores" } else { "misses" }.to_string(),
            }
        }
    };

    Ok(outcome)
}
