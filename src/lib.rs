#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # trello-lite
//!
//! trello-lite is a small typed wrapper around the Trello REST API.
//!
//! This library can read:
//! - [`Card`]
//! - [`Board`]
//! - [`List`]s of a board
//! - [`Comment`]s of a card
//!
//! And write:
//! - a new comment on a card
//! - a card's list (moving it across the board)
//!
//! Each operation is one HTTP round trip. Nothing is cached, retried or
//! rate-limited; responses are read into owned, read-only views.
//!
//! ## Example: Moving a card to the board's last list.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use trello_lite::{Auth, Card, Client, List};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(Auth::new("app-key", "user-token"));
//!     let card = Card::get(&client, "abcd1234").await?;
//!
//!     let lists = List::for_board(&client, card.id_board()).await?;
//!     if let Some(last) = lists.iter().filter(|l| !l.closed()).last() {
//!         let moved = Card::move_to_list(&client, card.id(), last.id()).await?;
//!         println!("{} is now in {}", moved.name(), last.name());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Card`]:    crate::models::card::Card
//! [`Board`]:   crate::models::board::Board
//! [`List`]:    crate::models::list::List
//! [`Comment`]: crate::models::comment::Comment

/// Client module contains [`Client`] for sending requests.
pub mod client;

/// Credentials and endpoint configuration.
pub mod config;

/// Contains [`Error`]s that can be returned by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod request;

pub(crate) mod result;

pub use client::Client;
pub use config::{Auth, Config};
pub use error::Error;
pub use models::*;
pub use models::{board::Board, card::Card, comment::Comment, list::List};
pub use result::Result;
