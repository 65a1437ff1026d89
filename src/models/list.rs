//! Lists of a board.

use serde::Serialize;

use crate::{models::wire::ListRecord, request, result::Result, Client};

/// A list (column) on a board.
///
/// Archived lists are returned as well; check [`List::closed`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct List {
    id: String,
    name: String,
    closed: bool,
    id_board: String,
    subscribed: bool,
    pos: f64,
}

impl List {
    /// Fetches every list of a board, open and closed, in the service's order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the id.
    pub async fn for_board(client: &Client, board_id: &str) -> Result<Vec<Self>> {
        let request = request::board_lists(client.config(), client.auth(), board_id)?;
        let records: Vec<ListRecord> = client.fetch_many(request).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Returns the list id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the list name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the list is archived.
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Returns the id of the board the list belongs to.
    pub fn id_board(&self) -> &str {
        &self.id_board
    }

    /// Returns true if the token's member is subscribed to the list.
    pub fn subscribed(&self) -> bool {
        self.subscribed
    }

    /// Returns the sort position of the list on its board.
    pub fn pos(&self) -> f64 {
        self.pos
    }
}

impl From<ListRecord> for List {
    fn from(record: ListRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            closed: record.closed,
            id_board: record.id_board,
            subscribed: record.subscribed,
            pos: record.pos,
        }
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.closed { "closed" } else { "open" };
        write!(f, "List: {} ({}) [{}]", self.name, self.id, state)
    }
}
