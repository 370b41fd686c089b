//! Walks the league listing page by page, then fetches the teams and rounds of one season.
//!
//! Run with tracing enabled:
//! ```sh
//! SPORTMONKS_API_TOKEN=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example leagues --features tracing
//! ```

use anyhow::Context as _;
use sportmonks_client_sdk::football::types::request::BySeasonRequest;
use sportmonks_client_sdk::query::{ByIdRequest, ListRequest};
use sportmonks_client_sdk::{API_TOKEN_VAR, Client};
use tracing::{debug, info};

const MAX_PAGES: u32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var(API_TOKEN_VAR).with_context(|| format!("{API_TOKEN_VAR} is not set"))?;
    let client = Client::new(token)?;

    for page in 1..=MAX_PAGES {
        let request = ListRequest::builder()
            .page(page)
            .include(["currentSeason"])
            .build();

        let response = match client.leagues(&request).await {
            Ok(response) => response,
            Err(e) => {
                debug!(endpoint = "leagues", page, error = %e);
                break;
            }
        };

        for league in &response.data {
            info!(
                endpoint = "leagues",
                page,
                id = league.id,
                name = %league.name,
                current_season = ?league.current_season.as_ref().map(|s| &s.name)
            );
        }

        if !response.pagination.is_some_and(|p| p.has_more) {
            break;
        }
    }

    let request = ByIdRequest::builder().id(501).include(["seasons"]).build();
    let Some(season_id) = client
        .league_by_id(&request)
        .await?
        .data
        .seasons
        .and_then(|seasons| seasons.into_iter().find(|s| s.is_current))
        .map(|season| season.id)
    else {
        info!(endpoint = "league_by_id", "league has no current season");
        return Ok(());
    };

    let request = BySeasonRequest::builder().season_id(season_id).build();

    match client.teams_by_season(&request).await {
        Ok(response) => {
            for team in &response.data {
                info!(endpoint = "teams_by_season", id = team.id, name = %team.name);
            }
        }
        Err(e) => debug!(endpoint = "teams_by_season", error = %e),
    }

    match client.rounds_by_season(&request).await {
        Ok(response) => {
            let current = response.data.iter().find(|round| round.is_current);
            info!(
                endpoint = "rounds_by_season",
                count = response.data.len(),
                current = ?current.map(|round| &round.name)
            );
        }
        Err(e) => debug!(endpoint = "rounds_by_season", error = %e),
    }

    Ok(())
}
