use reqwest::{Client as ReqwestClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::{Auth, Config},
    error::Error,
    models::{decode_flat, decode_last},
    request::ApiRequest,
    result::Result,
};

/// Sends requests to the service on behalf of one set of credentials.
///
/// Cloning is cheap; clones share the underlying connection pool.
/// Timeouts, proxies and TLS settings belong to the [`reqwest::Client`]
/// passed to [`Client::with_http`].
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    auth: Auth,
    config: Config,
}

impl Client {
    /// Creates a client for the public endpoint with a default transport.
    pub fn new(auth: Auth) -> Client {
        Self::with_config(auth, Config::default())
    }

    /// Creates a client for the endpoint described by `config`.
    pub fn with_config(auth: Auth, config: Config) -> Client {
        Self::with_http(ReqwestClient::new(), auth, config)
    }

    /// Creates a client around an already configured transport.
    pub fn with_http(http: ReqwestClient, auth: Auth, config: Config) -> Client {
        Client { http, auth, config }
    }

    /// Creates a client from `TRELLO_KEY`, `TRELLO_TOKEN` and the optional
    /// `TRELLO_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are missing or the base url is unusable.
    pub fn from_env() -> Result<Client> {
        Ok(Self::with_config(Auth::from_env()?, Config::from_env()?))
    }

    /// Returns the credentials attached to each request.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Returns the endpoint configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends `request` and returns the body of a `200 OK` response.
    ///
    /// The body is read to the end before returning so the connection is
    /// handed back to the pool whatever the caller does with it.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
        let ApiRequest {
            method,
            url,
            params,
        } = request;

        log::info!("{} request for {} dispatched", method, url);
        let builder = if method == Method::GET {
            self.http.request(method, url).query(&params)
        } else {
            self.http.request(method, url).form(&params)
        };
        let response = builder.send().await?;

        log::debug!("response status: {}", response.status());
        match response.status() {
            StatusCode::OK => Ok(response.bytes().await?.to_vec()),
            _ => Err(classify(response).await),
        }
    }

    /// Sends `request` and decodes a single record from the response.
    pub(crate) async fn fetch_one<T>(&self, request: ApiRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(request).await?;
        decode_last(&body)
    }

    /// Sends `request` and decodes every record of every array in the response.
    pub(crate) async fn fetch_many<T>(&self, request: ApiRequest) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(request).await?;
        let records = decode_flat(&body)?;
        log::debug!("decoded {} records", records.len());
        Ok(records)
    }
}

/// Turns an unsuccessful response into an [`Error`] carrying its status and body.
///
/// A failure while reading the body wins over the status.
pub(crate) async fn classify(response: Response) -> Error {
    let status = response.status();
    match response.text().await {
        Ok(body) => Error::Status { status, body },
        Err(source) => Error::ErrorBody { status, source },
    }
}
