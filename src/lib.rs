//! Assistant Bot - an interactive command-line contact manager.
//!
//! The bot reads commands such as `add alice 0501234567` from a prompt and
//! keeps the contacts in an in-memory address book for the lifetime of the
//! process.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers)
//! - **models**: Contact records and the address book
//! - **commands**: Input parsing, command handlers and dispatch
//! - **session**: The prompt/read/reply loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use commands::{execute, Command, Reply};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use session::run_session;
