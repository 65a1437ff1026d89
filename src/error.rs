use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the operations of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (connection, TLS, timeout...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The service answered with anything other than `200 OK`.
    #[error("{status}:{body}")]
    Status {
        /// Status line of the response, e.g. `404 Not Found`.
        status: StatusCode,
        /// The response body as sent by the service.
        body: String,
    },

    /// The service answered with an error status and its body could not be read.
    #[error("could not read body of {status} response: {source}")]
    ErrorBody {
        /// Status of the failed response.
        status: StatusCode,
        /// The failure raised while reading the body.
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape expected.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// A single entity was expected but the response body held no JSON value.
    #[error("response body contained no JSON value")]
    EmptyBody,

    /// The configured base url can not have path segments appended to it.
    #[error("{0} can not be used as a base url")]
    InvalidBaseUrl(String),

    /// The configured base url does not parse.
    #[error("{0}")]
    Url(#[from] url::ParseError),

    /// Credentials or configuration could not be read from the environment.
    #[error("{0}")]
    Env(#[from] envy::Error),

    /// A card's last activity could not be read as an RFC 3339 timestamp.
    #[error("{0}")]
    Timestamp(#[from] chrono::ParseError),
}
