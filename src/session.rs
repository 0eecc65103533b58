//! The interactive input loop.
//!
//! The loop is generic over its reader and writer so the whole conversation
//! can be driven from memory in tests; `main` wires it to stdin/stdout.

use crate::commands::{execute, Reply};
use crate::models::AddressBook;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Banner printed once when the session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every command.
pub const PROMPT: &str = "Enter a command: ";

/// Run the command loop until `close`/`exit` or end of input.
///
/// Each line read from `reader` is handled against `book` and the reply is
/// written to `writer`, followed by a newline.
///
/// # Errors
///
/// Only I/O failures on `reader` or `writer` are returned; command failures
/// are part of the conversation.
pub async fn run_session<R, W>(reader: R, mut writer: W, book: &mut AddressBook) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(WELCOME.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed, ending session");
            break;
        };

        let reply = execute(&line, book);
        writer.write_all(reply.text().as_bytes()).await?;
        writer.write_all(b"\n").await?;

        if let Reply::Exit(_) = reply {
            debug!(contacts = book.len(), "Session finished by user");
            break;
        }
    }

    writer.flush().await
}
