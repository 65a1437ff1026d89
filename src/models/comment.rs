//! Comments on cards, read and written.

use serde::Serialize;

use crate::{
    models::wire::{ActionRecord, EntityRef},
    request,
    result::Result,
    Client,
};

/// A comment left on a card.
///
/// Built from a `commentCard` action. Parts of the action the service left
/// out read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    id: String,
    author: String,
    username: String,
    text: String,
    card_id: String,
    board_id: String,
    list_id: String,
}

impl Comment {
    /// Posts `text` as a new comment on the card.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects the comment.
    pub async fn post(client: &Client, card_id: &str, text: &str) -> Result<()> {
        let request = request::comment_post(client.config(), client.auth(), card_id, text)?;
        client.execute(request).await?;
        Ok(())
    }

    /// Lists the comments of a card, newest first.
    ///
    /// The service caps how many actions it returns (50 at the time of
    /// writing); only that first page is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects the id,
    /// or the response is not a list of actions.
    pub async fn list(client: &Client, card_id: &str) -> Result<Vec<Self>> {
        let request = request::comment_list(client.config(), client.auth(), card_id)?;
        let records: Vec<ActionRecord> = client.fetch_many(request).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Returns the id of the action behind the comment.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the full name of the member who wrote the comment.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the username of the member who wrote the comment.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the comment body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the id of the card the comment was left on.
    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    /// Returns the id of the board the card was on when commented.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Returns the id of the list the card was in when commented.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }
}

impl From<ActionRecord> for Comment {
    fn from(record: ActionRecord) -> Self {
        let ref_id = |r: Option<EntityRef>| r.map(|r| r.id).unwrap_or_default();

        let (author, username) = record
            .member_creator
            .map(|m| (m.full_name, m.username))
            .unwrap_or_default();
        let (text, card_id, board_id, list_id) = record
            .data
            .map(|d| (d.text, ref_id(d.card), ref_id(d.board), ref_id(d.list)))
            .unwrap_or_default();

        Self {
            id: record.id,
            author,
            username,
            text,
            card_id,
            board_id,
            list_id,
        }
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.author, self.text)
    }
}
