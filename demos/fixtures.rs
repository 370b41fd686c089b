//! Fixture endpoints: a single fixture with includes, a date range with filters, and a
//! head-to-head listing.
//!
//! Run with tracing enabled:
//! ```sh
//! SPORTMONKS_API_TOKEN=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example fixtures --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=fixtures.log SPORTMONKS_API_TOKEN=... RUST_LOG=info cargo run --example fixtures --features tracing
//! ```

use std::fs::File;
use std::time::Duration;

use anyhow::Context as _;
use sportmonks_client_sdk::error::Kind;
use sportmonks_client_sdk::football::types::request::{
    FixtureByIdRequest, FixturesBetweenRequest, HeadToHeadRequest,
};
use sportmonks_client_sdk::query::Filters;
use sportmonks_client_sdk::types::NaiveDate;
use sportmonks_client_sdk::{API_TOKEN_VAR, Client, Config};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let token = std::env::var(API_TOKEN_VAR).with_context(|| format!("{API_TOKEN_VAR} is not set"))?;
    let config = Config::builder().timeout(Duration::from_secs(10)).build();
    let client = Client::with_config(token, config)?;

    let request = FixtureByIdRequest::builder()
        .id(18_535_517)
        .include(["participants", "scores", "state"])
        .build();

    match client.fixture_by_id(&request).await {
        Ok(response) => {
            let (fixture, details) = response.into_parts();
            info!(
                endpoint = "fixture_by_id",
                name = %fixture.name,
                state = ?fixture.state.as_ref().map(|s| &s.state),
                score = ?fixture.current_score(),
                remaining = details.rate_limit.remaining
            );
        }
        Err(e) if e.kind() == Kind::RateLimit => {
            warn!(endpoint = "fixture_by_id", resets_in_seconds = ?e.rate_limit_payload().and_then(|p| p.body.resets_in_seconds()));
        }
        Err(e) => debug!(endpoint = "fixture_by_id", error = %e),
    }

    let from = NaiveDate::from_ymd_opt(2023, 1, 1).context("valid date")?;
    let to = NaiveDate::from_ymd_opt(2023, 1, 31).context("valid date")?;
    let request = FixturesBetweenRequest::builder()
        .from(from)
        .to(to)
        .include(["participants"])
        .filters(Filters::new().with("fixtureLeagues", [8]))
        .build();

    match client.fixtures_between(&request).await {
        Ok(response) => {
            info!(
                endpoint = "fixtures_between",
                count = response.data.len(),
                has_more = response.pagination.as_ref().is_some_and(|p| p.has_more)
            );
            for fixture in &response.data {
                info!(endpoint = "fixtures_between", id = fixture.id, name = %fixture.name);
            }
        }
        Err(e) => debug!(endpoint = "fixtures_between", error = %e),
    }

    let request = HeadToHeadRequest::builder()
        .first_team_id(9)
        .second_team_id(19)
        .build();

    match client.head_to_head(&request).await {
        Ok(response) => info!(endpoint = "head_to_head", count = response.data.len()),
        Err(e) => debug!(endpoint = "head_to_head", error = %e),
    }

    Ok(())
}
