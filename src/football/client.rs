//! Football endpoints on [`Client`].
//!
//! Every method is a thin mapping from its request to a path and query; the fetch, status
//! classification and envelope decoding are shared with every other endpoint.

use super::types::request::{
    BySeasonRequest, COACHES, COMMENTARIES, CONTINENTS, COUNTRIES, FixtureByIdRequest,
    FixturesBetweenForTeamRequest, FixturesBetweenRequest, FixturesByDateRequest,
    FixturesByIdsRequest, HeadToHeadRequest, LEAGUES, PLAYERS, ROUNDS, SEASONS, STAGES,
    SquadBySeasonRequest, SquadByTeamRequest, TEAMS, TOP_SCORERS, TV_STATIONS, VENUES,
};
use super::types::response::{
    Coach, Commentary, Continent, Country, Fixture, League, Player, Round, Season, SquadMember,
    Stage, Team, TopScorer, TvStation, Venue,
};
use crate::Result;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::query::{ByIdRequest, ListRequest};

impl Client {
    /// Retrieves a single fixture by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a non-`200` status, or the
    /// payload is not a fixture.
    pub async fn fixture_by_id(&self, request: &FixtureByIdRequest) -> Result<Envelope<Fixture>> {
        self.get(&request.path(), request.query()).await
    }

    /// Retrieves several fixtures in one call.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Request`](crate::error::Kind::Request) error without sending anything
    /// when `ids` is empty; `/football/fixtures/multi/` is never requested. Otherwise fails like
    /// [`Self::fixture_by_id`].
    pub async fn fixtures_by_ids(
        &self,
        request: &FixturesByIdsRequest,
    ) -> Result<Envelope<Vec<Fixture>>> {
        let path = request.path()?;
        self.get_list(&path, request.query()).await
    }

    /// Retrieves the fixtures played on one day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fixtures_by_date(
        &self,
        request: &FixturesByDateRequest,
    ) -> Result<Envelope<Vec<Fixture>>> {
        self.get_list(&request.path(), request.query()).await
    }

    /// Retrieves the fixtures between two dates, both inclusive.
    ///
    /// Results are paginated, see [`Envelope::pagination`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, including when the API rejects the range.
    pub async fn fixtures_between(
        &self,
        request: &FixturesBetweenRequest,
    ) -> Result<Envelope<Vec<Fixture>>> {
        self.get_list(&request.path(), request.query()).await
    }

    /// Retrieves one team's fixtures between two dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fixtures_between_for_team(
        &self,
        request: &FixturesBetweenForTeamRequest,
    ) -> Result<Envelope<Vec<Fixture>>> {
        self.get_list(&request.path(), request.query()).await
    }

    /// Retrieves the fixtures two teams played against each other.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn head_to_head(
        &self,
        request: &HeadToHeadRequest,
    ) -> Result<Envelope<Vec<Fixture>>> {
        self.get_list(&request.path(), request.query()).await
    }

    /// Retrieves a league by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn league_by_id(&self, request: &ByIdRequest) -> Result<Envelope<League>> {
        self.get(&format!("{LEAGUES}/{}", request.id), request.query())
            .await
    }

    /// Retrieves one page of the leagues available to the subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn leagues(&self, request: &ListRequest) -> Result<Envelope<Vec<League>>> {
        self.get_list(LEAGUES, request.query()).await
    }

    /// Retrieves a season by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn season_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Season>> {
        self.get(&format!("{SEASONS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves one page of seasons.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn seasons(&self, request: &ListRequest) -> Result<Envelope<Vec<Season>>> {
        self.get_list(SEASONS, request.query()).await
    }

    /// Retrieves a team by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn team_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Team>> {
        self.get(&format!("{TEAMS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves the teams taking part in a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn teams_by_season(&self, request: &BySeasonRequest) -> Result<Envelope<Vec<Team>>> {
        self.get_list(&request.path(TEAMS), request.query()).await
    }

    /// Retrieves a venue by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn venue_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Venue>> {
        self.get(&format!("{VENUES}/{}", request.id), request.query())
            .await
    }

    /// Retrieves the venues used in a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn venues_by_season(
        &self,
        request: &BySeasonRequest,
    ) -> Result<Envelope<Vec<Venue>>> {
        self.get_list(&request.path(VENUES), request.query()).await
    }

    /// Retrieves a round by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn round_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Round>> {
        self.get(&format!("{ROUNDS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves the rounds of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn rounds_by_season(
        &self,
        request: &BySeasonRequest,
    ) -> Result<Envelope<Vec<Round>>> {
        self.get_list(&request.path(ROUNDS), request.query()).await
    }

    /// Retrieves a stage by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn stage_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Stage>> {
        self.get(&format!("{STAGES}/{}", request.id), request.query())
            .await
    }

    /// Retrieves the stages of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn stages_by_season(
        &self,
        request: &BySeasonRequest,
    ) -> Result<Envelope<Vec<Stage>>> {
        self.get_list(&request.path(STAGES), request.query()).await
    }

    /// Retrieves a player by their id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn player_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Player>> {
        self.get(&format!("{PLAYERS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves a coach by their id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn coach_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Coach>> {
        self.get(&format!("{COACHES}/{}", request.id), request.query())
            .await
    }

    /// Retrieves the current squad of a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn squad_by_team(
        &self,
        request: &SquadByTeamRequest,
    ) -> Result<Envelope<Vec<SquadMember>>> {
        self.get_list(&request.path(), request.query()).await
    }

    /// Retrieves the squad a team registered for one season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn squad_by_season(
        &self,
        request: &SquadBySeasonRequest,
    ) -> Result<Envelope<Vec<SquadMember>>> {
        self.get_list(&request.path(), request.query()).await
    }

    /// Retrieves the top-scorer rankings of a season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn top_scorers_by_season(
        &self,
        request: &BySeasonRequest,
    ) -> Result<Envelope<Vec<TopScorer>>> {
        self.get_list(&request.path(TOP_SCORERS), request.query())
            .await
    }

    /// Retrieves the broadcasters of a fixture. `request.id` is the fixture id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tv_stations_by_fixture(
        &self,
        request: &ByIdRequest,
    ) -> Result<Envelope<Vec<TvStation>>> {
        self.get_list(&format!("{TV_STATIONS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves the text commentary of a fixture. `request.id` is the fixture id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn commentaries_by_fixture(
        &self,
        request: &ByIdRequest,
    ) -> Result<Envelope<Vec<Commentary>>> {
        self.get_list(&format!("{COMMENTARIES}/{}", request.id), request.query())
            .await
    }

    /// Retrieves a continent by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn continent_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Continent>> {
        self.get(&format!("{CONTINENTS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves one page of continents.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn continents(&self, request: &ListRequest) -> Result<Envelope<Vec<Continent>>> {
        self.get_list(CONTINENTS, request.query()).await
    }

    /// Retrieves a country by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn country_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Country>> {
        self.get(&format!("{COUNTRIES}/{}", request.id), request.query())
            .await
    }

    /// Retrieves one page of countries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn countries(&self, request: &ListRequest) -> Result<Envelope<Vec<Country>>> {
        self.get_list(COUNTRIES, request.query()).await
    }
}
