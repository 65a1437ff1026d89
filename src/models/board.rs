//! Boards.

use serde::Serialize;

use crate::{models::wire::BoardRecord, request, result::Result, Client};

/// A board, reduced to its id and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    id: String,
    name: String,
}

impl Board {
    /// Fetches the board with the given id.
    ///
    /// Only the `name` field is requested from the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the id.
    pub async fn get(client: &Client, board_id: &str) -> Result<Self> {
        let request = request::board_get(client.config(), client.auth(), board_id)?;
        let record: BoardRecord = client.fetch_one(request).await?;
        Ok(record.into())
    }

    /// Returns the board id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the board name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<BoardRecord> for Board {
    fn from(record: BoardRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board: {} ({})", self.name, self.id)
    }
}

#[cfg(all(test, feature = "display"))]
mod tests {
    use super::*;

    #[test]
    fn display_shows_board() {
        let board = Board::from(BoardRecord {
            id: "b1".to_string(),
            name: "Work".to_string(),
        });
        assert_eq!(board.to_string(), "Board: Work (b1)");
    }
}
