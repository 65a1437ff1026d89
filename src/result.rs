use crate::error::Error as TrelloErr;

/// Result of every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, TrelloErr>;
