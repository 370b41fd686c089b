//! The Sportmonks HTTP client and its configuration.
//!
//! Endpoint methods live next to the types they return, in [`crate::football`] and
//! [`crate::odds`]; this module owns the shared fetch pipeline they all delegate to.

use std::fmt;
use std::time::Duration;

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method,
    header::{HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::envelope::Envelope;
use crate::query::{API_TOKEN, QueryParams};
use crate::{DEFAULT_BASE_URL, Result};

const USER_AGENT: &str = concat!("sportmonks-client-sdk/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
#[non_exhaustive]
pub struct Config {
    /// API root the resource paths are appended to. Defaults to `https://api.sportmonks.com/v3`.
    #[builder(default = DEFAULT_BASE_URL.to_owned(), into)]
    base_url: String,
    /// Upper bound for a whole request, from connect to the last body byte. Unbounded when unset.
    timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    #[builder(default = USER_AGENT.to_owned(), into)]
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

/// HTTP client for the Sportmonks v3 API.
///
/// Every call is a single `GET` authenticated with the `api_token` query parameter. Calls are
/// plain futures: dropping one, e.g. through [`tokio::time::timeout`] or `select!`, aborts the
/// in-flight request. Nothing is retried, cached or throttled.
///
/// `Client` is cheap to clone and can be shared between tasks.
///
/// # Example
///
/// ```no_run
/// use sportmonks_client_sdk::Client;
/// use sportmonks_client_sdk::football::types::request::FixtureByIdRequest;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("my-api-token")?;
///
/// let request = FixtureByIdRequest::builder()
///     .id(18_535_517)
///     .include(["participants", "scores"])
///     .build();
/// let (fixture, details) = client.fixture_by_id(&request).await?.into_parts();
///
/// println!("{} ({} calls left)", fixture.name, details.rate_limit.remaining);
/// # Ok(())
/// # }
/// ```
///
/// [`tokio::time::timeout`]: https://docs.rs/tokio/latest/tokio/time/fn.timeout.html
#[derive(Clone)]
pub struct Client {
    host: Url,
    api_token: SecretString,
    client: ReqwestClient,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host.as_str())
            .field("api_token", &self.api_token)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new<S: Into<String>>(api_token: S) -> Result<Client> {
        Client::with_config(api_token, Config::default())
    }

    /// Creates a client from an explicit [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if `config.base_url` is not an absolute URL or the HTTP client cannot be
    /// created.
    pub fn with_config<S: Into<String>>(api_token: S, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        headers.insert("User-Agent", HeaderValue::from_str(&config.user_agent)?);
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            host: parse_base_url(&config.base_url)?,
            api_token: SecretString::from(api_token.into()),
            client: builder.build()?,
        })
    }

    /// Returns the API root requests are sent to.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Points the client at another API root, e.g. a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL; the current root is kept.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.host = parse_base_url(base_url)?;
        Ok(())
    }

    /// Replaces the underlying transport.
    ///
    /// Headers and timeouts configured on `client` apply from then on; the ones from
    /// [`Config`] do not carry over.
    pub fn set_http_client(&mut self, client: ReqwestClient) {
        self.client = client;
    }

    /// Fetches `path` relative to the API root and decodes the envelope.
    ///
    /// `api_token` is always written last, so it replaces any `api_token` already in `query`.
    pub(crate) async fn get<Data: DeserializeOwned>(
        &self,
        path: &str,
        mut query: QueryParams,
    ) -> Result<Envelope<Data>> {
        query.set(API_TOKEN, self.api_token.expose_secret());

        let url = Url::parse(&format!(
            "{}{path}",
            self.host.as_str().trim_end_matches('/')
        ))?;
        let request = self
            .client
            .request(Method::GET, url)
            .query(&query)
            .build()?;

        crate::request(&self.client, request).await
    }

    /// Same as [`Self::get`] for list endpoints. A missing or `null` `data` decodes as an empty
    /// list.
    pub(crate) async fn get_list<Item: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryParams,
    ) -> Result<Envelope<Vec<Item>>> {
        self.get::<Option<Vec<Item>>>(path, query)
            .await
            .map(Envelope::into_list)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(crate::error::Error::validation(format!(
            "{base_url} cannot be used as an API root"
        )));
    }
    Ok(url)
}
