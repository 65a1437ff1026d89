//! Records shaped exactly like the service's JSON.
//!
//! Every field defaults when absent so a partial payload still decodes;
//! the public views are built from these with `From`.

use serde::Deserialize;

use crate::models::nullable;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CardRecord {
    pub(crate) id: String,
    pub(crate) date_last_activity: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) desc: String,
    pub(crate) id_board: String,
    pub(crate) id_list: String,
    pub(crate) name: String,
    pub(crate) short_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct BoardRecord {
    pub(crate) id: String,
    pub(crate) name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ListRecord {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) closed: bool,
    pub(crate) id_board: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) subscribed: bool,
    #[serde(deserialize_with = "nullable")]
    pub(crate) pos: f64,
}

/// An action; only `commentCard` actions are ever requested.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ActionRecord {
    pub(crate) id: String,
    pub(crate) data: Option<ActionData>,
    pub(crate) member_creator: Option<MemberCreator>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ActionData {
    pub(crate) list: Option<EntityRef>,
    pub(crate) board: Option<EntityRef>,
    pub(crate) card: Option<EntityRef>,
    #[serde(deserialize_with = "nullable")]
    pub(crate) text: String,
}

/// The `{id, name, ...}` stub the service embeds for related entities.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct EntityRef {
    pub(crate) id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct MemberCreator {
    #[serde(deserialize_with = "nullable")]
    pub(crate) full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub(crate) username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn card_uses_service_field_names() {
        let record: CardRecord = serde_json::from_value(json!({
            "id": "5abbe4b7ddc1b351ef961414",
            "dateLastActivity": "2024-03-01T10:15:30.000Z",
            "desc": "FOOBAR",
            "idBoard": "board-1",
            "idList": "list-1",
            "name": "Test",
            "shortUrl": "https://trello.com/c/abcd1234",
            "closed": false
        }))
        .unwrap();
        assert_eq!(record.id, "5abbe4b7ddc1b351ef961414");
        assert_eq!(record.date_last_activity, "2024-03-01T10:15:30.000Z");
        assert_eq!(record.desc, "FOOBAR");
        assert_eq!(record.id_board, "board-1");
        assert_eq!(record.id_list, "list-1");
        assert_eq!(record.short_url, "https://trello.com/c/abcd1234");
    }

    #[test]
    fn list_reads_numeric_position() {
        let record: ListRecord = serde_json::from_value(json!({
            "id": "l1", "name": "Done", "closed": true,
            "idBoard": "b1", "subscribed": null, "pos": 16384.5
        }))
        .unwrap();
        assert!(record.closed);
        assert!(!record.subscribed);
        assert!((record.pos - 16384.5).abs() < f64::EPSILON);
    }

    #[test]
    fn action_tolerates_missing_objects() {
        let record: ActionRecord = serde_json::from_value(json!({ "id": "a1" })).unwrap();
        assert!(record.data.is_none());
        assert!(record.member_creator.is_none());

        let record: ActionRecord =
            serde_json::from_value(json!({ "id": "a1", "data": null, "memberCreator": null }))
                .unwrap();
        assert!(record.data.is_none());
        assert!(record.member_creator.is_none());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let result = serde_json::from_value::<ListRecord>(json!({ "id": "l1", "closed": "yes" }));
        assert!(result.is_err());
    }
}
