//! Walks through every operation against the live service.
//!
//! This example shows:
//! - Creating a client from `TRELLO_KEY` and `TRELLO_TOKEN`
//! - Commenting on a card and reading the comments back
//! - Finding the card's board and its lists
//! - Moving the card to another list and back
//!
//! The card and target list are read from `TRELLO_DEMO_CARD` and
//! `TRELLO_DEMO_TO_LIST` (the list's name, not its id).

use serde::Deserialize;
use simple_logger::SimpleLogger;
use trello_lite::{Board, Card, Client, Comment, List};

/// Type alias for simplifying error handling
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Deserialize)]
struct Demo {
    card: String,
    to_list: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // setting up logging.
    SimpleLogger::new().init()?;

    let demo: Demo = envy::prefixed("TRELLO_DEMO_").from_env()?;
    let client = Client::from_env()?;

    // leave a comment and look for it
    let text = "test 1\nhello world";
    Comment::post(&client, &demo.card, text).await?;
    let comments = Comment::list(&client, &demo.card).await?;
    let found = comments.iter().any(|c| c.text() == text);
    println!("comment found: {found}");

    let card = Card::get(&client, &demo.card).await?;
    println!("card: {} in list {}", card.name(), card.id_list());

    let board = Board::get(&client, card.id_board()).await?;
    let lists = List::for_board(&client, board.id()).await?;
    println!("board {} has {} lists", board.name(), lists.len());

    match lists.iter().find(|l| l.name() == demo.to_list) {
        Some(target) => {
            let moved = Card::move_to_list(&client, card.id(), target.id()).await?;
            println!("moved to {}", moved.id_list());

            // move it back
            let restored = Card::move_to_list(&client, card.id(), card.id_list()).await?;
            println!("moved back to {}", restored.id_list());
        }
        None => println!("no list named {} on {}", demo.to_list, board.name()),
    }

    Ok(())
}
