use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug)]
pub enum DrawError {
    #[error("luckybot core error: {0}")]
    Core(#[from] luckybot_core::LuckyError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No participants")]
    NoParticipants,

    #[error("Invalid roll value: {0} (expected 1..=6)")]
    InvalidRoll(u8),

    /// A round eliminated everybody. Selection policies never do this.
    #[error("Internal error: round {round} produced no survivors")]
    NoSurvivors { round: usize },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Broken resolver invariants, as opposed to user-facing conditions.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::NoSurvivors { .. } | Self::Internal(_))
    }
}
