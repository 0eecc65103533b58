//! Shared behavior of the string-backed fields stored on a record.

/// A value stored on a contact record.
///
/// Both [`Name`](super::Name) and [`Phone`](super::Phone) are thin wrappers
/// around a string; this trait gives callers uniform read access to it.
pub trait Field {
    /// The raw stored value.
    fn value(&self) -> &str;
}
