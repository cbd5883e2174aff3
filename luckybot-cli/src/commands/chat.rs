use crate::transport::ConsoleTransport;
use chrono::Local;
use clap::{Args, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use luckybot_core::{parse_date, ChatEvent, ChatId, Sender};
use luckybot_draw::{Command, LuckyBot, Result};

#[derive(Args, Debug, Clone)]
pub struct Actor {
    /// Chat the command is sent to
    #[arg(long, default_value_t = 1)]
    pub chat: i64,

    /// Id of the sending user
    #[arg(long, default_value_t = 1)]
    pub user_id: i64,

    /// Username of the sending user
    #[arg(long, default_value = "player")]
    pub name: String,

    /// Send the command as if it were this day (DD.MM.YYYY)
    #[arg(long)]
    pub date: Option<String>,
}

impl Actor {
    pub fn event(&self, command: Command) -> Result<ChatEvent> {
        let sent_at = match &self.date {
            Some(date) => parse_date(date)?.and_time(Local::now().time()),
            None => Local::now().naive_local(),
        };

        Ok(ChatEvent {
            chat: ChatId(self.chat),
            sender: Sender {
                id: self.user_id,
                username: Some(self.name.clone()),
                first_name: self.name.clone(),
                is_bot: false,
            },
            text: format!("/{}", command.name()),
            sent_at,
        })
    }
}

#[derive(Subcommand)]
pub enum ChatCommands {
    /// Register to the game
    Register {
        #[command(flatten)]
        actor: Actor,
    },
    /// Draw today's winner
    Lucky {
        #[command(flatten)]
        actor: Actor,
    },
    /// Show the ranking
    Top {
        #[command(flatten)]
        actor: Actor,
    },
    /// Show the upcoming games
    Schedule {
        #[command(flatten)]
        actor: Actor,
    },
    /// Replay the oldest day without a result
    Missing {
        #[command(flatten)]
        actor: Actor,
    },
    /// Show how much of the year has passed
    Progress {
        #[command(flatten)]
        actor: Actor,
    },
    /// Estimate everyone's chance to win the year
    Chances {
        #[command(flatten)]
        actor: Actor,
    },
    /// Check the bot is alive
    Ping {
        #[command(flatten)]
        actor: Actor,
    },
}

impl ChatCommands {
    fn split(self) -> (Command, Actor) {
        match self {
            Self::Register { actor } => (Command::Register, actor),
            Self::Lucky { actor } => (Command::Lucky, actor),
            Self::Top { actor } => (Command::Top, actor),
            Self::Schedule { actor } => (Command::Schedule, actor),
            Self::Missing { actor } => (Command::Missing, actor),
            Self::Progress { actor } => (Command::Progress, actor),
            Self::Chances { actor } => (Command::Chances, actor),
            Self::Ping { actor } => (Command::Ping, actor),
        }
    }
}

pub async fn handle_chat_command(
    cmd: ChatCommands,
    bot: &LuckyBot<ConsoleTransport>,
) -> Result<()> {
    let (command, actor) = cmd.split();
    let event = actor.event(command)?;

    tracing::debug!("Sending /{} as {} to chat {}", command.name(), actor.name, actor.chat);
    bot.dispatch(command, &event).await
}

/// Command menu as registered with the chat platform.
pub fn print_menu() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Command", "Description"]);

    for command in Command::ALL {
        table.add_row(vec![format!("/{}", command.name()), command.description().to_string()]);
    }

    println!("{}", table);
}
