//! Request types for the Football API.
//!
//! Each request renders to a resource path (relative to the API root) and a [`QueryParams`] set.
//! Both are pure functions of the request, so nothing here touches the network.

use bon::Builder;
use chrono::NaiveDate;

use crate::DATE_FORMAT;
use crate::Result;
use crate::error::Error;
use crate::query::{Filters, Include, PAGE, QueryParams, join_ids};

pub(crate) const FIXTURES: &str = "/football/fixtures";
pub(crate) const LEAGUES: &str = "/football/leagues";
pub(crate) const SEASONS: &str = "/football/seasons";
pub(crate) const TEAMS: &str = "/football/teams";
pub(crate) const VENUES: &str = "/football/venues";
pub(crate) const ROUNDS: &str = "/football/rounds";
pub(crate) const STAGES: &str = "/football/stages";
pub(crate) const PLAYERS: &str = "/football/players";
pub(crate) const COACHES: &str = "/football/coaches";
pub(crate) const SQUADS: &str = "/football/squads";
pub(crate) const TOP_SCORERS: &str = "/football/topscorers";
pub(crate) const TV_STATIONS: &str = "/football/tv-stations/fixtures";
pub(crate) const COMMENTARIES: &str = "/commentaries/fixture";
pub(crate) const CONTINENTS: &str = "/core/continents";
pub(crate) const COUNTRIES: &str = "/core/countries";

fn date(date: NaiveDate) -> impl std::fmt::Display {
    date.format(DATE_FORMAT)
}

/// Request for a single fixture.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct FixtureByIdRequest {
    pub id: i64,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl FixtureByIdRequest {
    pub(crate) fn path(&self) -> String {
        format!("{FIXTURES}/{}", self.id)
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for several fixtures at once.
///
/// An empty `ids` list is rejected with [`Kind::Request`](crate::error::Kind::Request) instead of
/// requesting `/football/fixtures/multi/`.
///
/// ```
/// use sportmonks_client_sdk::football::types::request::FixturesByIdsRequest;
///
/// let request = FixturesByIdsRequest::builder()
///     .ids(vec![18_535_517, 18_535_518])
///     .include(["scores"])
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct FixturesByIdsRequest {
    /// Fixture ids, sent in this order. Must not be empty.
    pub ids: Vec<i64>,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl FixturesByIdsRequest {
    pub(crate) fn path(&self) -> Result<String> {
        if self.ids.is_empty() {
            return Err(Error::validation("at least one fixture id is required"));
        }
        Ok(format!("{FIXTURES}/multi/{}", join_ids(&self.ids)))
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for every fixture on a calendar day.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct FixturesByDateRequest {
    pub date: NaiveDate,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl FixturesByDateRequest {
    pub(crate) fn path(&self) -> String {
        format!("{FIXTURES}/date/{}", date(self.date))
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for fixtures in a date range, both ends inclusive.
///
/// The range is passed through as given; the API rejects ranges it does not accept.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct FixturesBetweenRequest {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl FixturesBetweenRequest {
    pub(crate) fn path(&self) -> String {
        format!("{FIXTURES}/between/{}/{}", date(self.from), date(self.to))
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for one team's fixtures in a date range.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct FixturesBetweenForTeamRequest {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub team_id: i64,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl FixturesBetweenForTeamRequest {
    pub(crate) fn path(&self) -> String {
        format!(
            "{FIXTURES}/between/{}/{}/{}",
            date(self.from),
            date(self.to),
            self.team_id
        )
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for the fixtures two teams played against each other.
///
/// The endpoint takes no filters.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct HeadToHeadRequest {
    pub first_team_id: i64,
    pub second_team_id: i64,
    #[builder(default, into)]
    pub include: Include,
}

impl HeadToHeadRequest {
    pub(crate) fn path(&self) -> String {
        format!(
            "{FIXTURES}/head-to-head/{}/{}",
            self.first_team_id, self.second_team_id
        )
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, None)
    }
}

/// Request for every resource of one kind in a season (teams, venues, rounds, stages, top
/// scorers).
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct BySeasonRequest {
    pub season_id: i64,
    /// Page to fetch, starting at 1.
    pub page: Option<u32>,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl BySeasonRequest {
    pub(crate) fn path(&self, resource: &str) -> String {
        format!("{resource}/seasons/{}", self.season_id)
    }

    pub(crate) fn query(&self) -> QueryParams {
        let mut query = QueryParams::new(&self.include, Some(&self.filters));
        if let Some(page) = self.page {
            query.set(PAGE, page.to_string());
        }
        query
    }
}

/// Request for the current squad of a team.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SquadByTeamRequest {
    pub team_id: i64,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl SquadByTeamRequest {
    pub(crate) fn path(&self) -> String {
        format!("{SQUADS}/teams/{}", self.team_id)
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for the squad a team registered for one season.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct SquadBySeasonRequest {
    pub season_id: i64,
    pub team_id: i64,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl SquadBySeasonRequest {
    pub(crate) fn path(&self) -> String {
        format!(
            "{SQUADS}/seasons/{}/teams/{}",
            self.season_id, self.team_id
        )
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;
    use crate::query::INCLUDE;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn fixture_by_id_path_should_embed_id() {
        let request = FixtureByIdRequest::builder().id(18_535_517).build();

        assert_eq!(request.path(), "/football/fixtures/18535517");
        assert_eq!(request.query().get(INCLUDE), Some(""));
    }

    #[test]
    fn fixtures_by_ids_path_should_join_in_order() -> Result<()> {
        let request = FixturesByIdsRequest::builder().ids(vec![5, 17, 42]).build();

        assert_eq!(request.path()?, "/football/fixtures/multi/5,17,42");
        Ok(())
    }

    #[test]
    fn fixtures_by_ids_without_ids_should_fail() {
        let request = FixturesByIdsRequest::builder().ids(Vec::new()).build();

        let err = request.path().unwrap_err();

        assert_eq!(err.kind(), Kind::Request);
    }

    #[test]
    fn fixtures_by_date_should_zero_pad() {
        let request = FixturesByDateRequest::builder().date(ymd(2024, 3, 9)).build();

        assert_eq!(request.path(), "/football/fixtures/date/2024-03-09");
    }

    #[test]
    fn fixtures_between_path_should_format_both_dates() {
        let request = FixturesBetweenRequest::builder()
            .from(ymd(2023, 1, 1))
            .to(ymd(2023, 1, 31))
            .build();

        assert_eq!(
            request.path(),
            "/football/fixtures/between/2023-01-01/2023-01-31"
        );
    }

    #[test]
    fn inverted_range_should_be_passed_through() {
        let request = FixturesBetweenRequest::builder()
            .from(ymd(2023, 2, 1))
            .to(ymd(2023, 1, 1))
            .build();

        assert_eq!(
            request.path(),
            "/football/fixtures/between/2023-02-01/2023-01-01"
        );
    }

    #[test]
    fn fixtures_between_for_team_should_append_team() {
        let request = FixturesBetweenForTeamRequest::builder()
            .from(ymd(2023, 1, 1))
            .to(ymd(2023, 1, 31))
            .team_id(85)
            .build();

        assert_eq!(
            request.path(),
            "/football/fixtures/between/2023-01-01/2023-01-31/85"
        );
    }

    #[test]
    fn head_to_head_should_only_send_include() {
        let request = HeadToHeadRequest::builder()
            .first_team_id(2650)
            .second_team_id(86)
            .include(["participants"])
            .build();

        let query = request.query();

        assert_eq!(request.path(), "/football/fixtures/head-to-head/2650/86");
        assert_eq!(query.get(INCLUDE), Some("participants"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn by_season_request_should_target_resource() {
        let request = BySeasonRequest::builder()
            .season_id(19_734)
            .page(2)
            .filters(Filters::new().with("venueCountries", [462]))
            .build();

        let query = request.query();

        assert_eq!(request.path(TEAMS), "/football/teams/seasons/19734");
        assert_eq!(request.path(ROUNDS), "/football/rounds/seasons/19734");
        assert_eq!(query.get(PAGE), Some("2"));
        assert_eq!(query.get("venueCountries"), Some("462"));
    }

    #[test]
    fn squad_path_should_embed_team() {
        let request = SquadByTeamRequest::builder().team_id(53).build();

        assert_eq!(request.path(), "/football/squads/teams/53");
    }

    #[test]
    fn season_squad_path_should_embed_season_then_team() {
        let request = SquadBySeasonRequest::builder()
            .season_id(19_735)
            .team_id(53)
            .build();

        assert_eq!(request.path(), "/football/squads/seasons/19735/teams/53");
    }

    #[test]
    fn top_scorers_should_use_season_path() {
        let request = BySeasonRequest::builder().season_id(19_735).build();

        assert_eq!(
            request.path(TOP_SCORERS),
            "/football/topscorers/seasons/19735"
        );
    }
}
