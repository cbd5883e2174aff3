//! luckybot core - shared types, storage and chat delivery
//!
//! Everything a chat lottery needs below the game logic: participant and
//! result records isolated per chat, the `DD.MM.YYYY` date key, a paced and
//! rate-limit aware sender, and per-chat command locks.

pub mod config;
pub mod dates;
pub mod delivery;
pub mod error;
pub mod lock;
pub mod storage;
pub mod transport;
pub mod types;

pub use config::{BotConfig, DeliveryConfig, DrawMode};
pub use dates::{format_date, parse_date};
pub use delivery::Courier;
pub use error::{LuckyError, Result};
pub use lock::{ChatLockGuard, ChatLocks};
pub use storage::{ParticipantOrder, ParticipantStore, ResultStore, Storage};
pub use transport::Transport;
pub use types::{ChatEvent, ChatId, Participant, ResultRecord, SendOptions, Sender};
