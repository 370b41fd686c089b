//! Sportmonks Football API endpoints and types.
//!
//! **Feature flag:** `football` (enabled by default)
//!
//! The methods in this module are defined on [`crate::Client`]. Every one of them takes a
//! request built with its `builder()`, carrying the path arguments plus an
//! [`Include`](crate::query::Include) list and, for most endpoints, a
//! [`Filters`](crate::query::Filters) set.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Shape |
//! |----------|--------|-------|
//! | `/football/fixtures/{id}` | [`fixture_by_id`](crate::Client::fixture_by_id) | single |
//! | `/football/fixtures/multi/{ids}` | [`fixtures_by_ids`](crate::Client::fixtures_by_ids) | list |
//! | `/football/fixtures/date/{date}` | [`fixtures_by_date`](crate::Client::fixtures_by_date) | list |
//! | `/football/fixtures/between/{from}/{to}` | [`fixtures_between`](crate::Client::fixtures_between) | list |
//! | `/football/fixtures/between/{from}/{to}/{team}` | [`fixtures_between_for_team`](crate::Client::fixtures_between_for_team) | list |
//! | `/football/fixtures/head-to-head/{first}/{second}` | [`head_to_head`](crate::Client::head_to_head) | list |
//! | `/football/leagues/{id}` | [`league_by_id`](crate::Client::league_by_id) | single |
//! | `/football/leagues` | [`leagues`](crate::Client::leagues) | list |
//! | `/football/seasons/{id}` | [`season_by_id`](crate::Client::season_by_id) | single |
//! | `/football/seasons` | [`seasons`](crate::Client::seasons) | list |
//! | `/football/teams/{id}` | [`team_by_id`](crate::Client::team_by_id) | single |
//! | `/football/teams/seasons/{season}` | [`teams_by_season`](crate::Client::teams_by_season) | list |
//! | `/football/venues/{id}` | [`venue_by_id`](crate::Client::venue_by_id) | single |
//! | `/football/venues/seasons/{season}` | [`venues_by_season`](crate::Client::venues_by_season) | list |
//! | `/football/rounds/{id}` | [`round_by_id`](crate::Client::round_by_id) | single |
//! | `/football/rounds/seasons/{season}` | [`rounds_by_season`](crate::Client::rounds_by_season) | list |
//! | `/football/stages/{id}` | [`stage_by_id`](crate::Client::stage_by_id) | single |
//! | `/football/stages/seasons/{season}` | [`stages_by_season`](crate::Client::stages_by_season) | list |
//! | `/football/players/{id}` | [`player_by_id`](crate::Client::player_by_id) | single |
//! | `/football/coaches/{id}` | [`coach_by_id`](crate::Client::coach_by_id) | single |
//! | `/football/squads/teams/{team}` | [`squad_by_team`](crate::Client::squad_by_team) | list |
//! | `/football/squads/seasons/{season}/teams/{team}` | [`squad_by_season`](crate::Client::squad_by_season) | list |
//! | `/football/topscorers/seasons/{season}` | [`top_scorers_by_season`](crate::Client::top_scorers_by_season) | list |
//! | `/football/tv-stations/fixtures/{fixture}` | [`tv_stations_by_fixture`](crate::Client::tv_stations_by_fixture) | list |
//! | `/commentaries/fixture/{fixture}` | [`commentaries_by_fixture`](crate::Client::commentaries_by_fixture) | list |
//! | `/core/continents/{id}` | [`continent_by_id`](crate::Client::continent_by_id) | single |
//! | `/core/continents` | [`continents`](crate::Client::continents) | list |
//! | `/core/countries/{id}` | [`country_by_id`](crate::Client::country_by_id) | single |
//! | `/core/countries` | [`countries`](crate::Client::countries) | list |
//!
//! List endpoints answer a query without results with an empty `data`, never an error.
//!
//! # Example
//!
//! ```no_run
//! use sportmonks_client_sdk::Client;
//! use sportmonks_client_sdk::football::types::request::FixturesBetweenRequest;
//! use sportmonks_client_sdk::query::Filters;
//! use sportmonks_client_sdk::types::NaiveDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("my-api-token")?;
//!
//! let request = FixturesBetweenRequest::builder()
//!     .from(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
//!     .to(NaiveDate::from_ymd_opt(2023, 1, 31).unwrap())
//!     .include(["participants"])
//!     .filters(Filters::new().with("fixtureLeagues", [8]))
//!     .build();
//!
//! let fixtures = client.fixtures_between(&request).await?;
//! for fixture in &fixtures.data {
//!     println!("{}: {}", fixture.id, fixture.name);
//! }
//! if let Some(pagination) = fixtures.pagination {
//!     println!("more pages: {}", pagination.has_more);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;
