use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five mini-games. Stateless and shared by every chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVariant {
    Darts,
    Bowling,
    Basketball,
    Football,
    Dice,
}

/// How a raw face becomes a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// Score is the face itself. `miss` is the narration for a face of 1, if
    /// the game treats it as a miss.
    Face {
        verb: &'static str,
        miss: Option<&'static str>,
    },
    /// One point when the face reaches `min_value`, zero otherwise.
    Hit { min_value: u8 },
}

/// How a round's outcomes narrow the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Everybody sharing the top score goes on.
    HighestScore,
    /// Everybody who scored goes on. If nobody did the round is void and
    /// the whole field goes on unchanged.
    Threshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub scoring: Scoring,
    pub policy: SelectionPolicy,
}

/// Survivors of one round, as indices into the round's outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub survivors: Vec<usize>,
    pub void: bool,
}

impl GameVariant {
    /// Rotation used by the daily schedule. The order is part of the history
    /// of every chat; never reorder it.
    pub const SCHEDULE: [GameVariant; 5] = [
        GameVariant::Darts,
        GameVariant::Bowling,
        GameVariant::Basketball,
        GameVariant::Football,
        GameVariant::Dice,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Darts => "darts",
            Self::Bowling => "bowling",
            Self::Basketball => "basketball",
            Self::Football => "football",
            Self::Dice => "dice",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Darts => "Darts",
            Self::Bowling => "Bowling",
            Self::Basketball => "Basketball",
            Self::Football => "Football",
            Self::Dice => "Dice",
        }
    }

    /// Also selects the animation the chat platform plays for a roll.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Darts => "🎯",
            Self::Bowling => "🎳",
            Self::Basketball => "🏀",
            Self::Football => "⚽",
            Self::Dice => "🎲",
        }
    }

    pub fn rules(self) -> GameRules {
        match self {
            Self::Dice => GameRules {
                scoring: Scoring::Face {
                    verb: "rolled",
                    miss: None,
                },
                policy: SelectionPolicy::HighestScore,
            },
            Self::Darts => GameRules {
                scoring: Scoring::Face {
                    verb: "scores",
                    miss: Some("missed"),
                },
                policy: SelectionPolicy::HighestScore,
            },
            Self::Bowling => GameRules {
                scoring: Scoring::Face {
                    verb: "scores",
                    miss: Some("misses"),
                },
                policy: SelectionPolicy::HighestScore,
            },
            Self::Basketball => GameRules {
                scoring: Scoring::Hit { min_value: 4 },
                policy: SelectionPolicy::Threshold,
            },
            Self::Football => GameRules {
                scoring: Scoring::Hit { min_value: 3 },
                policy: SelectionPolicy::Threshold,
            },
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::SCHEDULE
            .into_iter()
            .find(|variant| variant.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.name())
    }
}

impl SelectionPolicy {
    pub fn select(self, outcomes: &[Outcome]) -> Selection {
        match self {
            Self::HighestScore => {
                let best = outcomes.iter().map(|o| o.score).max();
                let survivors = outcomes
                    .iter()
                    .enumerate()
                    .filter(|(_, o)| Some(o.score) == best)
                    .map(|(i, _)| i)
                    .collect();

                Selection {
                    survivors,
                    void: false,
                }
            }
            Self::Threshold => {
                let scorers: Vec<usize> = outcomes
                    .iter()
                    .enumerate()
                    .filter(|(_, o)| o.scored)
                    .map(|(i, _)| i)
                    .collect();

                if scorers.is_empty() {
                    Selection {
                        survivors: (0..outcomes.len()).collect(),
                        void: !outcomes.is_empty(),
                    }
                } else {
                    Selection {
                        survivors: scorers,
                        void: false,
                    }
                }
            }
        }
    }
}
