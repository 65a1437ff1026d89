//! Cards and the operations that read or move them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{models::wire::CardRecord, request, result::Result, Client};

/// A card as returned by the service.
///
/// The id never changes; the parent list only changes through
/// [`Card::move_to_list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    id: String,
    name: String,
    desc: String,
    id_board: String,
    id_list: String,
    short_url: String,
    date_last_activity: String,
}

impl Card {
    /// Fetches the card with the given id (or short link).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects the id,
    /// or the response is not a card.
    pub async fn get(client: &Client, card_id: &str) -> Result<Self> {
        let request = request::card_get(client.config(), client.auth(), card_id)?;
        let record: CardRecord = client.fetch_one(request).await?;
        Ok(record.into())
    }

    /// Moves the card into another list and returns it as updated by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or either id is rejected.
    pub async fn move_to_list(client: &Client, card_id: &str, list_id: &str) -> Result<Self> {
        let request = request::card_move(client.config(), client.auth(), card_id, list_id)?;
        let record: CardRecord = client.fetch_one(request).await?;
        Ok(record.into())
    }

    /// Returns the card id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the card title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the card description.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Returns the id of the board the card is on.
    pub fn id_board(&self) -> &str {
        &self.id_board
    }

    /// Returns the id of the list the card is in.
    pub fn id_list(&self) -> &str {
        &self.id_list
    }

    /// Returns the short url of the card.
    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    /// Returns the last activity time exactly as the service sent it.
    pub fn date_last_activity(&self) -> &str {
        &self.date_last_activity
    }

    /// Parses [`Card::date_last_activity`] as an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is empty or not RFC 3339.
    pub fn last_activity_at(&self) -> Result<DateTime<Utc>> {
        let time = DateTime::parse_from_rfc3339(&self.date_last_activity)?;
        Ok(time.with_timezone(&Utc))
    }
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            desc: record.desc,
            id_board: record.id_board,
            id_list: record.id_list,
            short_url: record.short_url,
            date_last_activity: record.date_last_activity,
        }
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card: {} ({})\nList: {}\nLast activity: {}\n{}",
            self.name, self.short_url, self.id_list, self.date_last_activity, self.desc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    fn card(date_last_activity: &str) -> Card {
        let record: CardRecord = serde_json::from_value(json!({
            "id": "c1",
            "name": "Test",
            "dateLastActivity": date_last_activity,
        }))
        .unwrap();
        record.into()
    }

    #[test]
    fn partial_payload_defaults_to_empty() {
        let card = card("");
        assert_eq!(card.id(), "c1");
        assert_eq!(card.name(), "Test");
        assert_eq!(card.desc(), "");
        assert_eq!(card.id_list(), "");
        assert_eq!(card.short_url(), "");
    }

    #[test]
    fn parses_last_activity() {
        let time = card("2024-03-01T10:15:30.250Z").last_activity_at().unwrap();
        assert_eq!(time.year(), 2024);
        assert_eq!(time.month(), 3);
        assert_eq!(time.hour(), 10);
        assert_eq!(time.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn bad_last_activity_is_an_error() {
        assert!(matches!(card("yesterday").last_activity_at(), Err(Error::Timestamp(_))));
        assert!(matches!(card("").last_activity_at(), Err(Error::Timestamp(_))));
    }
}

#[cfg(all(test, feature = "display"))]
mod display_tests {
    use super::*;

    #[test]
    fn display_shows_card() {
        let card = Card::from(CardRecord {
            id: "c1".to_string(),
            name: "Test".to_string(),
            desc: "FOOBAR".to_string(),
            id_list: "l1".to_string(),
            short_url: "https://trello.com/c/abcd1234".to_string(),
            date_last_activity: "2024-03-01T10:15:30.000Z".to_string(),
            ..CardRecord::default()
        });
        assert_eq!(
            card.to_string(),
            "Card: Test (https://trello.com/c/abcd1234)\nList: l1\nLast activity: 2024-03-01T10:15:30.000Z\nFOOBAR"
        );
    }
}
