#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod client;
pub mod envelope;
pub mod error;
#[cfg(feature = "football")]
pub mod football;
#[cfg(feature = "odds")]
pub mod odds;
pub mod query;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;

pub use crate::client::{Client, Config};
use crate::envelope::Envelope;
use crate::error::{Error, ErrorBody, RateLimitBody};

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable the demos read the API token from.
pub const API_TOKEN_VAR: &str = "SPORTMONKS_API_TOKEN";

/// Default API root. Resource paths such as `/football/fixtures` are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api.sportmonks.com/v3";

/// Date layout for every date path segment.
#[cfg(feature = "football")]
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sends `request` and decodes the body into an [`Envelope`].
///
/// The status is classified before any attempt to decode the payload, see [`check_status`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
pub(crate) async fn request<Data: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Envelope<Data>> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let body = response.bytes().await?;

    check_status(status_code, method, path, &body)?;

    serde_helpers::decode_body(&body)
}

/// Turns a non-`200` response into its error.
///
/// `429` becomes [`error::Kind::RateLimit`], every other non-`200` status becomes
/// [`error::Kind::Status`]. When the error body itself cannot be decoded the decode error is
/// returned instead.
pub(crate) fn check_status(
    status_code: StatusCode,
    method: Method,
    path: String,
    body: &[u8],
) -> Result<()> {
    if status_code == StatusCode::TOO_MANY_REQUESTS {
        let payload: RateLimitBody = serde_json::from_slice(body)?;

        #[cfg(feature = "tracing")]
        tracing::warn!(
            method = %method,
            path = %path,
            resets_in_seconds = ?payload.resets_in_seconds(),
            "API rate limit reached"
        );

        return Err(Error::rate_limited(method, path, payload));
    }

    if status_code != StatusCode::OK {
        let payload: ErrorBody = serde_json::from_slice(body)?;

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = ?payload.message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, payload));
    }

    Ok(())
}
