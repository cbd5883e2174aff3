//! Chat command surface.
//!
//! Each command is a thin adapter: it gathers what it needs from storage and
//! the incoming event, calls into the draw components and reports back to the
//! chat. `/lucky` and `/missing` hold the chat's lock for their whole run; a
//! second one arriving meanwhile is turned away, not queued.

mod handlers;
pub mod messages;


use crate::error::{DrawError, Result};
use luckybot_core::{BotConfig, ChatEvent, ChatLocks, Courier, Storage, Transport};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Register,
    Lucky,
    Top,
    Schedule,
    Missing,
    Progress,
    Chances,
    Ping,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Register,
        Command::Lucky,
        Command::Top,
        Command::Schedule,
        Command::Missing,
        Command::Progress,
        Command::Chances,
        Command::Ping,
    ];

    /// Parse `/name`, `/name@bot` or `/name args`.
    pub fn parse(text: &str) -> Option<Self> {
        let token = text.split_whitespace().next()?;
        let name = token.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);

        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Lucky => "lucky",
            Self::Top => "top",
            Self::Schedule => "schedule",
            Self::Missing => "missing",
            Self::Progress => "progress",
            Self::Chances => "chances",
            Self::Ping => "ping",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Register => "Register to the game",
            Self::Lucky => "Try your luck",
            Self::Top => "Get the top participants",
            Self::Schedule => "Get the games schedule",
            Self::Missing => "Replay the oldest day without a result",
            Self::Progress => "Get year's progress",
            Self::Chances => "Estimate everyone's chance to win the year",
            Self::Ping => "Ping the bot",
        }
    }

    /// Commands that draw a winner and therefore run one at a time per chat.
    pub fn is_exclusive(self) -> bool {
        matches!(self, Self::Lucky | Self::Missing)
    }
}

pub struct LuckyBot<T> {
    storage: Arc<Storage>,
    courier: Courier<T>,
    locks: ChatLocks,
    config: BotConfig,
}

impl<T: Transport> LuckyBot<T> {
    pub fn new(storage: Arc<Storage>, transport: T, config: BotConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            storage,
            courier: Courier::new(transport, config.delivery.clone()),
            locks: ChatLocks::new(),
            config,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn transport(&self) -> &T {
        self.courier.transport()
    }

    pub fn locks(&self) -> &ChatLocks {
        &self.locks
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Entry point for every incoming message. Non-commands and messages
    /// from other bots are ignored.
    pub async fn handle(&self, event: &ChatEvent) -> Result<()> {
        if event.sender.is_bot {
            tracing::debug!("Ignoring message from bot {}", event.sender.id);
            return Ok(());
        }

        match Command::parse(&event.text) {
            Some(command) => self.dispatch(command, event).await,
            None => Ok(()),
        }
    }

    pub async fn dispatch(&self, command: Command, event: &ChatEvent) -> Result<()> {
        let chat = event.chat;

        // Held until the end of this function, whatever the outcome.
        let _guard = if command.is_exclusive() {
            match self.locks.try_acquire(chat) {
                Some(guard) => Some(guard),
                None => {
                    tracing::info!("Rejecting /{} in chat {}: busy", command.name(), chat);
                    self.courier.message(chat, messages::BUSY).await?;
                    return Ok(());
                }
            }
        } else {
            None
        };

        tracing::info!(
            "Handling /{} from {} in chat {}",
            command.name(),
            event.sender.id,
            chat
        );

        let result = match command {
            Command::Register => self.register(event).await,
            Command::Lucky => self.lucky(event).await,
            Command::Top => self.top(event).await,
            Command::Schedule => self.schedule(event).await,
            Command::Missing => self.missing(event).await,
            Command::Progress => self.progress(event).await,
            Command::Chances => self.chances(event).await,
            Command::Ping => self.ping(event).await,
        };

        if let Err(e) = &result {
            self.report_failure(command, event, e).await;
        }

        result
    }

    async fn report_failure(&self, command: Command, event: &ChatEvent, error: &DrawError) {
        if error.is_internal() {
            tracing::error!(
                "Internal error in /{} for chat {}: {}",
                command.name(),
                event.chat,
                error
            );
        } else {
            tracing::error!("/{} failed in chat {}: {}", command.name(), event.chat, error);
        }

        let notice = messages::failure(error);
        if let Err(e) = self.courier.message(event.chat, &notice).await {
            tracing::warn!("Could not deliver failure notice to chat {}: {}", event.chat, e);
        }
    }
}
