//! Types for the Football API.
//!
//! - **Request types** ([`request`]): builder-pattern structs carrying path arguments, includes
//!   and filters for each endpoint.
//! - **Response types** ([`response`]): the entities found in an envelope's `data`. Relations
//!   that were not requested through `include` are `None`.
//!
//! ```
//! use sportmonks_client_sdk::football::types::request::FixtureByIdRequest;
//! use sportmonks_client_sdk::query::Filters;
//!
//! let request = FixtureByIdRequest::builder()
//!     .id(18_535_517)
//!     .include(["lineups", "events"])
//!     .filters(Filters::new().with("eventTypes", [14, 15]))
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

/// Side of the pitch a participant, score, or formation belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum ParticipantLocation {
    Home,
    Away,
    /// Unknown location from the API (captures the raw value for debugging).
    #[serde(untagged)]
    #[strum(to_string = "{0}")]
    Unknown(String),
}
