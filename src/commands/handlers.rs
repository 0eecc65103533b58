//! Command handlers.
//!
//! Each handler takes the parsed arguments plus the address book and returns
//! either the text to show or a [`CommandError`]. [`respond`] turns both into
//! the final reply.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::{debug, info};

/// Greeting returned by `hello`.
pub const GREETING: &str = "How can I help you?";

/// Reply to `all` when the book is empty.
pub const NO_CONTACTS: &str = "No contacts found";

/// Collapse a handler result into the text shown to the user.
pub fn respond(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|err| {
        debug!(error = ?err, "Command failed");
        err.to_string()
    })
}

fn arg(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument)
}

/// `add <name> <phone>`: store a fresh record holding one phone.
///
/// An existing contact with the same name is replaced, phones and all.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let mut record = Record::new(name);
    record.add_phone(phone)?;

    if book.find(name).is_some() {
        info!(name = %name, "Overwriting existing contact");
    }
    book.add_record(record);

    Ok(format!("Contact '{}' added with phone {}", name, phone))
}

/// `change <name> <phone>`: replace the contact's first phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let record = book.find_mut(name).ok_or(CommandError::MissingContact)?;
    let first = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or(CommandError::MissingArgument)?;
    record.edit_phone(&first, phone)?;

    debug!(name = %name, old = %first, new = %phone, "Phone changed");
    Ok(format!("Contact '{}' updated.", name))
}

/// `phone <name>`: list every phone of one contact.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let record = book.find(name).ok_or(CommandError::MissingContact)?;

    Ok(format!("Phone for '{}': {}", name, record.join_phones(", ")))
}

/// `all`: list every contact in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok(NO_CONTACTS.to_string());
    }

    let lines: Vec<String> = book
        .iter()
        .map(|(name, record)| format!("{}: {}", name, record.join_phones(", ")))
        .collect();

    Ok(format!("All contacts:\n{}", lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_add_contact() {
        let mut book = AddressBook::new();
        let reply = add_contact(&args(&["alice", "1234567890"]), &mut book).unwrap();
        assert_eq!(reply, "Contact 'alice' added with phone 1234567890");

        let record = book.find("alice").unwrap();
        assert_eq!(record.join_phones(","), "1234567890");
    }

    #[test]
    fn test_add_contact_overwrites() {
        let mut book = AddressBook::new();
        add_contact(&args(&["alice", "1111111111"]), &mut book).unwrap();
        add_contact(&args(&["alice", "2222222222"]), &mut book).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("alice").unwrap().join_phones(","), "2222222222");
    }

    #[test]
    fn test_add_contact_invalid_phone_stores_nothing() {
        let mut book = AddressBook::new();
        let result = add_contact(&args(&["alice", "12345"]), &mut book);
        assert!(matches!(result, Err(CommandError::Validation(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_invalid_phone_keeps_existing() {
        let mut book = AddressBook::new();
        add_contact(&args(&["alice", "1111111111"]), &mut book).unwrap();
        assert!(add_contact(&args(&["alice", "oops"]), &mut book).is_err());
        assert_eq!(book.find("alice").unwrap().join_phones(","), "1111111111");
    }

    #[test]
    fn test_add_contact_missing_args() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&args(&[]), &mut book),
            Err(CommandError::MissingArgument)
        );
        assert_eq!(
            add_contact(&args(&["alice"]), &mut book),
            Err(CommandError::MissingArgument)
        );
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        let mut record = Record::new("alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        book.add_record(record);

        let reply = change_contact(&args(&["alice", "3333333333"]), &mut book).unwrap();
        assert_eq!(reply, "Contact 'alice' updated.");
        assert_eq!(
            book.find("alice").unwrap().join_phones(", "),
            "2222222222, 3333333333"
        );
    }

    #[test]
    fn test_change_missing_contact() {
        let mut book = AddressBook::new();
        let result = change_contact(&args(&["bob", "3333333333"]), &mut book);
        assert_eq!(respond(result), "This contact does not exist");
    }

    #[test]
    fn test_change_contact_without_phones() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("carol"));
        let result = change_contact(&args(&["carol", "3333333333"]), &mut book);
        assert_eq!(result, Err(CommandError::MissingArgument));
    }

    #[test]
    fn test_change_contact_invalid_phone_drops_first() {
        let mut book = AddressBook::new();
        add_contact(&args(&["alice", "1111111111"]), &mut book).unwrap();
        let result = change_contact(&args(&["alice", "nope"]), &mut book);
        assert_eq!(respond(result), "Phone number must contain exactly 10 digits.");
        assert!(book.find("alice").unwrap().phones().is_empty());

        let again = change_contact(&args(&["alice", "3333333333"]), &mut book);
        assert_eq!(again, Err(CommandError::MissingArgument));
    }

    #[test]
    fn test_show_phone_lists_all_in_order() {
        let mut book = AddressBook::new();
        let mut record = Record::new("alice");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        book.add_record(record);

        let reply = show_phone(&args(&["alice"]), &book).unwrap();
        assert_eq!(reply, "Phone for 'alice': 1111111111, 2222222222");
    }

    #[test]
    fn test_show_phone_errors() {
        let book = AddressBook::new();
        assert_eq!(
            show_phone(&args(&["ghost"]), &book),
            Err(CommandError::MissingContact)
        );
        assert_eq!(show_phone(&args(&[]), &book), Err(CommandError::MissingArgument));
    }

    #[test]
    fn test_show_all_empty() {
        assert_eq!(show_all(&AddressBook::new()).unwrap(), "No contacts found");
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        add_contact(&args(&["bob", "2222222222"]), &mut book).unwrap();
        add_contact(&args(&["alice", "1111111111"]), &mut book).unwrap();
        book.find_mut("alice").unwrap().add_phone("3333333333").unwrap();

        assert_eq!(
            show_all(&book).unwrap(),
            "All contacts:\nbob: 2222222222\nalice: 1111111111, 3333333333"
        );
    }
}
