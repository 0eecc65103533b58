//! Command parsing and dispatch.
//!
//! [`execute`] is the single entry point the input loop uses: it parses a
//! raw line, routes it to the matching handler and returns what to print.

pub mod handlers;
pub mod parser;

pub use handlers::{add_contact, change_contact, respond, show_all, show_phone};
pub use parser::{parse_input, ParsedInput};

use crate::models::AddressBook;
use tracing::debug;

/// Printed when the user leaves.
pub const FAREWELL: &str = "Good bye!";

/// Printed for an unknown command word.
pub const INVALID_COMMAND: &str = "Invalid command.";

/// The commands the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Exit,
    Unknown,
}

impl Command {
    /// Map a lower-cased command word to its command.
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// What the input loop should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and wait for the next command.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Exit(text) => text,
        }
    }
}

/// Parse and run one line of input against `book`.
pub fn execute(line: &str, book: &mut AddressBook) -> Reply {
    let ParsedInput { command, args } = match parse_input(line) {
        Ok(parsed) => parsed,
        Err(err) => return Reply::Continue(respond(Err(err))),
    };

    let kind = Command::from_word(&command);
    debug!(command = %command, ?kind, args = args.len(), "Dispatching command");

    let text = match kind {
        Command::Exit => return Reply::Exit(FAREWELL.to_string()),
        Command::Hello => handlers::GREETING.to_string(),
        Command::Add => respond(add_contact(&args, book)),
        Command::Change => respond(change_contact(&args, book)),
        Command::Phone => respond(show_phone(&args, book)),
        Command::All => respond(show_all(book)),
        Command::Unknown => INVALID_COMMAND.to_string(),
    };

    Reply::Continue(text)
}
