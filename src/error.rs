use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;
use serde::{Deserialize, Serialize};

use crate::envelope::RateLimit;

/// Class of failure behind an [`Error`].
///
/// Every request made by this crate fails with exactly one of these kinds, so callers can match
/// on them exhaustively, e.g. to back off on [`Kind::RateLimit`] without inspecting the generic
/// [`Kind::Status`] case.
#[expect(
    clippy::exhaustive_enums,
    reason = "Callers are expected to match every failure class"
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The request could not be built (malformed base URL, path, or arguments)
    Request,
    /// Network, DNS, TLS, or timeout failure while talking to the API
    Transport,
    /// The API answered `429 Too Many Requests`
    RateLimit,
    /// The API answered with any other non-`200` status
    Status,
    /// A response body could not be decoded into the expected shape
    Decode,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Returns the decoded `429` payload when this is a [`Kind::RateLimit`] error.
    #[must_use]
    pub fn rate_limit_payload(&self) -> Option<&RateLimited> {
        self.downcast_ref::<RateLimited>()
    }

    /// Returns the decoded error payload when this is a [`Kind::Status`] error.
    #[must_use]
    pub fn status_payload(&self) -> Option<&Status> {
        self.downcast_ref::<Status>()
    }

    /// Whether the underlying transport gave up because a timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_timeout)
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn status(status_code: StatusCode, method: Method, path: String, body: ErrorBody) -> Self {
        Status {
            status_code,
            method,
            path,
            body,
        }
        .into()
    }

    pub fn rate_limited(method: Method, path: String, body: RateLimitBody) -> Self {
        RateLimited { method, path, body }.into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Body the API sends alongside a non-`200`, non-`429` status.
///
/// Every field is optional: any JSON object decodes, unknown keys are ignored.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    /// Sportmonks' own error code, distinct from the HTTP status.
    pub code: Option<i64>,
    /// Documentation link for the error, when provided.
    pub link: Option<String>,
}

/// Body the API sends alongside `429 Too Many Requests`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitBody {
    pub message: Option<String>,
    /// Remaining calls and seconds until the window resets, when embedded.
    pub rate_limit: Option<RateLimit>,
}

impl RateLimitBody {
    /// Seconds until the throttled entity becomes available again, if the API said so.
    #[must_use]
    pub fn resets_in_seconds(&self) -> Option<i64> {
        self.rate_limit.as_ref().map(|r| r.resets_in_seconds)
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub body: ErrorBody,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code,
            self.method,
            self.path,
            self.body.message.as_deref().unwrap_or("no message")
        )
    }
}

impl StdError for Status {}

#[non_exhaustive]
#[derive(Debug)]
pub struct RateLimited {
    pub method: Method,
    pub path: String,
    pub body: RateLimitBody,
}

impl fmt::Display for RateLimited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rate limited making {} call to {}", self.method, self.path)?;
        if let Some(seconds) = self.body.resets_in_seconds() {
            write!(f, ", resets in {seconds}s")?;
        }
        if let Some(message) = &self.body.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl StdError for RateLimited {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Error::with_source(Kind::Request, e)
        } else if e.is_decode() {
            Error::with_source(Kind::Decode, e)
        } else {
            Error::with_source(Kind::Transport, e)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Decode, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Request, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Request, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Request, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<RateLimited> for Error {
    fn from(err: RateLimited) -> Self {
        Error::with_source(Kind::RateLimit, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_should_include_code_and_message() {
        let status = Status {
            status_code: StatusCode::UNAUTHORIZED,
            method: Method::GET,
            path: "/v3/football/fixtures/1".to_owned(),
            body: ErrorBody {
                message: Some("Unauthenticated.".to_owned()),
                ..ErrorBody::default()
            },
        };

        assert_eq!(
            status.to_string(),
            "error(401 Unauthorized) making GET call to /v3/football/fixtures/1 with Unauthenticated."
        );
    }

    #[test]
    fn rate_limited_into_error_should_keep_payload() {
        let body: RateLimitBody = serde_json::from_value(serde_json::json!({
            "message": "You have reached the rate limit for this entity.",
            "rate_limit": {
                "resets_in_seconds": 1200,
                "remaining": 0,
                "requested_entity": "Fixture"
            }
        }))
        .expect("valid body");

        let error = Error::rate_limited(Method::GET, "/football/fixtures".to_owned(), body);

        assert_eq!(error.kind(), Kind::RateLimit);
        let payload = error.rate_limit_payload().expect("rate limit payload");
        assert_eq!(payload.body.resets_in_seconds(), Some(1200));
        assert!(error.status_payload().is_none());
        assert!(error.to_string().contains("resets in 1200s"));
    }

    #[test]
    fn serde_error_should_be_decode_kind() {
        let e = serde_json::from_str::<ErrorBody>("[").unwrap_err();
        let error: Error = e.into();

        assert_eq!(error.kind(), Kind::Decode);
    }

    #[test]
    fn validation_should_be_request_kind() {
        let error = Error::validation("at least one id is required");

        assert_eq!(error.kind(), Kind::Request);
        assert_eq!(
            error.to_string(),
            "Request: invalid: at least one id is required"
        );
    }
}
