pub mod chat;
pub mod results;

pub use chat::{handle_chat_command, print_menu, ChatCommands};
pub use results::{handle_results_command, ResultsCommands};
