//! Sportmonks Odds API endpoints and types.
//!
//! **Feature flag:** `odds` (enabled by default)
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Shape |
//! |----------|--------|-------|
//! | `/odds/bookmakers/{id}` | [`bookmaker_by_id`](crate::Client::bookmaker_by_id) | single |
//! | `/odds/bookmakers` | [`bookmakers`](crate::Client::bookmakers) | list |
//! | `/football/odds/pre-match/fixtures/{fixture}` | [`pre_match_odds_by_fixture`](crate::Client::pre_match_odds_by_fixture) | list |
//!
//! # Example
//!
//! ```no_run
//! use sportmonks_client_sdk::Client;
//! use sportmonks_client_sdk::odds::types::request::PreMatchOddsRequest;
//! use sportmonks_client_sdk::query::Filters;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("my-api-token")?;
//!
//! let request = PreMatchOddsRequest::builder()
//!     .fixture_id(18_535_517)
//!     .filters(Filters::new().with("bookmakers", [2]).with("markets", [1]))
//!     .build();
//!
//! for odd in client.pre_match_odds_by_fixture(&request).await?.data {
//!     println!("{} @ {}", odd.label, odd.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;
