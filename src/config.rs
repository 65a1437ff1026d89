//! Credentials and endpoint configuration.
//!
//! Both values are immutable once built and are handed to the [`Client`]
//! at construction time.
//!
//! [`Client`]: crate::Client

use std::fmt;

use serde::Deserialize;
use url::Url;

use crate::{error::Error, result::Result};

/// The public Trello REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Application key and user token attached to every request.
///
/// Neither value is validated locally; a bad pair is reported by the
/// service as an error status.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Auth {
    key: String,
    token: String,
}

impl Auth {
    /// Creates a credential pair.
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }

    /// Reads `TRELLO_KEY` and `TRELLO_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Env`] if either variable is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Reads `TRELLO_KEY` and `TRELLO_TOKEN` from `vars` instead of the environment.
    pub(crate) fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("TRELLO_")
            .from_iter::<_, Self>(vars)
            .map_err(Into::into)
    }

    /// Returns the application key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the user token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("key", &self.key)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Url,
}

impl Config {
    /// Creates a configuration rooted at `base_url`, e.g. `https://api.trello.com/1`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or can not take path segments
    /// (such as `mailto:` or `data:` urls).
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url: url })
    }

    /// Reads an optional `TRELLO_BASE_URL`, falling back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set to an unusable url.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub(crate) fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        #[derive(Deserialize)]
        struct Env {
            base_url: Option<String>,
        }

        let env: Env = envy::prefixed("TRELLO_").from_iter(vars)?;
        match env.base_url {
            Some(url) => Self::new(&url),
            None => Ok(Self::default()),
        }
    }

    /// Returns the base url every resource path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins `segments` onto the base url, percent-encoding each of them.
    pub(crate) fn endpoint<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for Config {
    // The constant is a valid absolute url.
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url parses"),
        }
    }
}
