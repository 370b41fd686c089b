//! Lists bookmakers and prints the pre-match "Fulltime Result" prices of one fixture.
//!
//! Run with tracing enabled:
//! ```sh
//! SPORTMONKS_API_TOKEN=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example odds --features tracing
//! ```

use anyhow::Context as _;
use sportmonks_client_sdk::odds::types::request::PreMatchOddsRequest;
use sportmonks_client_sdk::query::{Filters, ListRequest};
use sportmonks_client_sdk::{API_TOKEN_VAR, Client};
use tracing::{debug, info};

const FULLTIME_RESULT_MARKET: i64 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var(API_TOKEN_VAR).with_context(|| format!("{API_TOKEN_VAR} is not set"))?;
    let client = Client::new(token)?;

    match client.bookmakers(&ListRequest::default()).await {
        Ok(response) => {
            for bookmaker in &response.data {
                info!(endpoint = "bookmakers", id = bookmaker.id, name = %bookmaker.name);
            }
        }
        Err(e) => debug!(endpoint = "bookmakers", error = %e),
    }

    let request = PreMatchOddsRequest::builder()
        .fixture_id(18_535_517)
        .include(["bookmaker"])
        .filters(Filters::new().with("markets", [FULLTIME_RESULT_MARKET]))
        .build();

    match client.pre_match_odds_by_fixture(&request).await {
        Ok(response) => {
            for odd in &response.data {
                info!(
                    endpoint = "pre_match_odds_by_fixture",
                    bookmaker = ?odd.bookmaker.as_ref().map(|b| &b.name),
                    label = %odd.label,
                    value = %odd.value,
                    probability = ?odd.probability
                );
            }
        }
        Err(e) => debug!(endpoint = "pre_match_odds_by_fixture", error = %e),
    }

    Ok(())
}
