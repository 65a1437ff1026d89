//! Builders for every request the crate sends.
//!
//! Building is kept apart from sending so the exact method, url and
//! parameters of each operation can be checked without a network.

use reqwest::Method;
use url::Url;

use crate::{
    config::{Auth, Config},
    result::Result,
};

/// A fully described request, waiting to be sent by the [`Client`].
///
/// For `GET` the parameters become the query string, for anything else they
/// are sent as a form-encoded body.
///
/// [`Client`]: crate::Client
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(method: Method, url: Url, auth: &Auth) -> Self {
        let params = vec![
            ("key", auth.key().to_string()),
            ("token", auth.token().to_string()),
        ];
        Self {
            method,
            url,
            params,
        }
    }

    fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Returns the value of the first parameter called `name`.
    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub(crate) fn comment_post(
    config: &Config,
    auth: &Auth,
    card_id: &str,
    text: &str,
) -> Result<ApiRequest> {
    let url = config.endpoint(["cards", card_id, "actions", "comments"])?;
    Ok(ApiRequest::new(Method::POST, url, auth).param("text", text))
}

/// Only the action data and the creator's names are requested, which is all
/// a [`Comment`](crate::comment::Comment) exposes.
pub(crate) fn comment_list(config: &Config, auth: &Auth, card_id: &str) -> Result<ApiRequest> {
    let url = config.endpoint(["cards", card_id, "actions"])?;
    Ok(ApiRequest::new(Method::GET, url, auth)
        .param("filter", "commentCard")
        .param("fields", "data")
        .param("memberCreator_fields", "fullName,username"))
}

pub(crate) fn card_get(config: &Config, auth: &Auth, card_id: &str) -> Result<ApiRequest> {
    let url = config.endpoint(["cards", card_id])?;
    Ok(ApiRequest::new(Method::GET, url, auth))
}

pub(crate) fn card_move(
    config: &Config,
    auth: &Auth,
    card_id: &str,
    list_id: &str,
) -> Result<ApiRequest> {
    let url = config.endpoint(["cards", card_id, "idList"])?;
    Ok(ApiRequest::new(Method::PUT, url, auth).param("value", list_id))
}

pub(crate) fn board_get(config: &Config, auth: &Auth, board_id: &str) -> Result<ApiRequest> {
    let url = config.endpoint(["boards", board_id])?;
    Ok(ApiRequest::new(Method::GET, url, auth).param("fields", "name"))
}

pub(crate) fn board_lists(config: &Config, auth: &Auth, board_id: &str) -> Result<ApiRequest> {
    let url = config.endpoint(["boards", board_id, "lists"])?;
    Ok(ApiRequest::new(Method::GET, url, auth))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, Auth) {
        (Config::default(), Auth::new("k", "t"))
    }

    #[test]
    fn every_request_carries_credentials() {
        let (config, auth) = setup();
        let requests = [
            comment_post(&config, &auth, "c1", "hi").unwrap(),
            comment_list(&config, &auth, "c1").unwrap(),
            card_get(&config, &auth, "c1").unwrap(),
            card_move(&config, &auth, "c1", "l1").unwrap(),
            board_get(&config, &auth, "b1").unwrap(),
            board_lists(&config, &auth, "b1").unwrap(),
        ];
        for request in &requests {
            assert_eq!(request.get("key"), Some("k"), "{}", request.url);
            assert_eq!(request.get("token"), Some("t"), "{}", request.url);
        }
    }

    #[test]
    fn comment_post_sends_text_as_form() {
        let (config, auth) = setup();
        let request = comment_post(&config, &auth, "c1", "line one\nline two").unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://api.trello.com/1/cards/c1/actions/comments"
        );
        assert_eq!(request.get("text"), Some("line one\nline two"));
    }

    #[test]
    fn comment_list_filters_server_side() {
        let (config, auth) = setup();
        let request = comment_list(&config, &auth, "c1").unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://api.trello.com/1/cards/c1/actions");
        assert_eq!(request.get("filter"), Some("commentCard"));
        assert_eq!(request.get("fields"), Some("data"));
        assert_eq!(
            request.get("memberCreator_fields"),
            Some("fullName,username")
        );
    }

    #[test]
    fn card_move_puts_list_id() {
        let (config, auth) = setup();
        let request = card_move(&config, &auth, "c1", "l2").unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url.as_str(), "https://api.trello.com/1/cards/c1/idList");
        assert_eq!(request.get("value"), Some("l2"));
    }

    #[test]
    fn board_requests() {
        let (config, auth) = setup();
        let board = board_get(&config, &auth, "b1").unwrap();
        assert_eq!(board.url.as_str(), "https://api.trello.com/1/boards/b1");
        assert_eq!(board.get("fields"), Some("name"));

        let lists = board_lists(&config, &auth, "b1").unwrap();
        assert_eq!(lists.url.as_str(), "https://api.trello.com/1/boards/b1/lists");
        assert_eq!(lists.params.len(), 2);
    }

    #[test]
    fn card_get_has_no_extra_params() {
        let (config, auth) = setup();
        let request = card_get(&config, &auth, "c1").unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.as_str(), "https://api.trello.com/1/cards/c1");
        assert_eq!(request.params.len(), 2);
    }
}
