#![allow(
    clippy::module_name_repetitions,
    reason = "Entity names mirror the API resource names"
)]

use bon::Builder;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use super::ParticipantLocation;
use crate::serde_helpers::SportmonksDateTime;

/// A football match.
///
/// The scalar fields are always present. Relations are only populated when named in the
/// request's `include`, e.g. `include(["participants", "scores"])`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Fixture {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub league_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub season_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub stage_id: i64,
    pub group_id: Option<i64>,
    pub aggregate_id: Option<i64>,
    pub round_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub state_id: i64,
    pub venue_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    #[serde_as(as = "Option<SportmonksDateTime>")]
    pub starting_at: Option<NaiveDateTime>,
    pub result_info: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub leg: String,
    pub details: Option<String>,
    /// Scheduled length in minutes.
    pub length: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub placeholder: bool,
    #[serde(default)]
    #[builder(default)]
    pub has_odds: bool,
    #[serde(default)]
    #[builder(default)]
    pub has_premium_odds: bool,
    pub starting_at_timestamp: Option<i64>,

    pub round: Option<Round>,
    pub stage: Option<Stage>,
    pub league: Option<League>,
    pub season: Option<Season>,
    pub coaches: Option<Vec<Coach>>,
    #[serde(alias = "venues")]
    pub venue: Option<Venue>,
    pub state: Option<FixtureState>,
    #[serde(rename = "weatherReport", alias = "weatherreport")]
    pub weather_report: Option<WeatherReport>,
    pub lineups: Option<Vec<LineupPlayer>>,
    pub events: Option<Vec<FixtureEvent>>,
    pub statistics: Option<Vec<FixtureStat>>,
    pub scores: Option<Vec<Score>>,
    pub formations: Option<Vec<Formation>>,
    pub participants: Option<Vec<Team>>,
}

impl Fixture {
    /// The participant playing at home, when `participants` was included.
    #[must_use]
    pub fn home_team(&self) -> Option<&Team> {
        self.participant_at(&ParticipantLocation::Home)
    }

    /// The participant playing away, when `participants` was included.
    #[must_use]
    pub fn away_team(&self) -> Option<&Team> {
        self.participant_at(&ParticipantLocation::Away)
    }

    fn participant_at(&self, location: &ParticipantLocation) -> Option<&Team> {
        self.participants.as_deref()?.iter().find(|team| {
            team.meta
                .as_ref()
                .and_then(|meta| meta.location.as_ref())
                == Some(location)
        })
    }

    /// Goals per side for the score entry described as `CURRENT`, as `(home, away)`.
    #[must_use]
    pub fn current_score(&self) -> Option<(i64, i64)> {
        let current = self
            .scores
            .as_deref()?
            .iter()
            .filter(|score| score.description == "CURRENT");

        let (mut home, mut away) = (None, None);
        for score in current {
            match score.score.participant {
                ParticipantLocation::Home => home = Some(score.score.goals),
                ParticipantLocation::Away => away = Some(score.score.goals),
                ParticipantLocation::Unknown(_) => {}
            }
        }
        Some((home?, away?))
    }
}

/// A matchday within a stage.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Round {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub league_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub season_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub stage_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub finished: bool,
    #[serde(default)]
    #[builder(default)]
    pub is_current: bool,
    pub starting_at: Option<NaiveDate>,
    pub ending_at: Option<NaiveDate>,
    #[serde(default)]
    #[builder(default)]
    pub games_in_current_week: bool,
    pub fixtures: Option<Vec<Fixture>>,
}

/// A phase of a season such as "Regular Season" or "Quarter-finals".
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Stage {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub league_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub season_id: i64,
    pub type_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    pub sort_order: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub finished: bool,
    #[serde(default)]
    #[builder(default)]
    pub is_current: bool,
    pub starting_at: Option<NaiveDate>,
    pub ending_at: Option<NaiveDate>,
    #[serde(default)]
    #[builder(default)]
    pub games_in_current_week: bool,
    pub tie_breaker_rule_id: Option<i64>,
    pub rounds: Option<Vec<Round>>,
}

/// A competition, e.g. the Premier League.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct League {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    pub country_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub active: bool,
    pub short_code: Option<String>,
    pub image_path: Option<String>,
    /// `league`, `cup`, `playoffs`, ...
    #[serde(rename = "type")]
    pub league_type: Option<String>,
    pub sub_type: Option<String>,
    #[serde_as(as = "Option<SportmonksDateTime>")]
    pub last_played_at: Option<NaiveDateTime>,
    pub category: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub has_jerseys: bool,
    pub seasons: Option<Vec<Season>>,
    #[serde(rename = "currentSeason", alias = "currentseason")]
    pub current_season: Option<Box<Season>>,
}

/// One edition of a league, e.g. "2023/2024".
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Season {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub league_id: i64,
    pub tie_breaker_rule_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub finished: bool,
    #[serde(default)]
    #[builder(default)]
    pub pending: bool,
    #[serde(default)]
    #[builder(default)]
    pub is_current: bool,
    pub starting_at: Option<NaiveDate>,
    pub ending_at: Option<NaiveDate>,
    #[serde_as(as = "Option<SportmonksDateTime>")]
    pub standings_recalculated_at: Option<NaiveDateTime>,
    #[serde(default)]
    #[builder(default)]
    pub games_in_current_week: bool,
    pub league: Option<Box<League>>,
    pub stages: Option<Vec<Stage>>,
}

/// A team. Inside a fixture's `participants` it also carries per-fixture [`ParticipantMeta`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Team {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    pub country_id: Option<i64>,
    pub venue_id: Option<i64>,
    pub gender: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    pub short_code: Option<String>,
    pub image_path: Option<String>,
    pub founded: Option<i64>,
    /// `domestic` or `national`.
    #[serde(rename = "type")]
    pub team_type: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub placeholder: bool,
    #[serde_as(as = "Option<SportmonksDateTime>")]
    pub last_played_at: Option<NaiveDateTime>,
    pub meta: Option<ParticipantMeta>,
    pub venue: Option<Venue>,
    pub coaches: Option<Vec<Coach>>,
    pub players: Option<Vec<SquadMember>>,
}

/// Per-fixture details of a participant.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ParticipantMeta {
    pub location: Option<ParticipantLocation>,
    pub winner: Option<bool>,
    /// League table position before kick-off.
    pub position: Option<i64>,
}

/// A stadium.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Venue {
    pub id: i64,
    pub country_id: Option<i64>,
    pub city_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub capacity: Option<i64>,
    pub image_path: Option<String>,
    pub city_name: Option<String>,
    pub surface: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub national_team: bool,
}

/// A head coach or manager.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Coach {
    pub id: i64,
    pub player_id: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    pub country_id: Option<i64>,
    pub nationality_id: Option<i64>,
    pub city_id: Option<i64>,
    pub common_name: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    pub display_name: Option<String>,
    pub image_path: Option<String>,
    /// Centimetres.
    pub height: Option<i64>,
    /// Kilograms.
    pub weight: Option<i64>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// A player.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Player {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    pub country_id: Option<i64>,
    pub nationality_id: Option<i64>,
    pub city_id: Option<i64>,
    pub position_id: Option<i64>,
    pub detailed_position_id: Option<i64>,
    pub type_id: Option<i64>,
    pub common_name: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub name: String,
    pub display_name: Option<String>,
    pub image_path: Option<String>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Where a fixture is in its lifecycle, e.g. `NS`, `INPLAY_1ST_HALF`, `FT`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct FixtureState {
    pub id: i64,
    #[builder(into)]
    pub state: String,
    #[builder(into)]
    pub name: String,
    pub short_name: Option<String>,
    pub developer_name: Option<String>,
}

/// Weather at the venue around kick-off.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct WeatherReport {
    pub id: i64,
    pub fixture_id: i64,
    pub venue_id: Option<i64>,
    pub temperature: Option<Temperature>,
    pub feels_like: Option<Temperature>,
    pub wind: Option<Wind>,
    pub humidity: Option<String>,
    pub pressure: Option<i64>,
    pub clouds: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// `current` or `forecast`.
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    /// Unit system of the readings, e.g. `celcius`.
    pub metric: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Temperature {
    pub day: Option<f64>,
    pub morning: Option<f64>,
    pub evening: Option<f64>,
    pub night: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Wind {
    pub speed: Option<f64>,
    /// Degrees.
    pub direction: Option<f64>,
}

/// A player listed in a fixture's line-up (starter or bench).
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct LineupPlayer {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub sport_id: i64,
    pub fixture_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub position_id: Option<i64>,
    /// Grid slot such as `"2:3"`.
    pub formation_field: Option<String>,
    pub type_id: i64,
    pub formation_position: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default, into)]
    pub player_name: String,
    pub jersey_number: Option<i64>,
}

/// Something that happened during a fixture: goal, card, substitution, ...
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct FixtureEvent {
    pub id: i64,
    pub fixture_id: i64,
    pub period_id: Option<i64>,
    pub participant_id: i64,
    pub type_id: i64,
    pub section: Option<String>,
    pub player_id: Option<i64>,
    pub related_player_id: Option<i64>,
    pub player_name: Option<String>,
    pub related_player_name: Option<String>,
    /// Score after the event, e.g. `"1-0"`.
    pub result: Option<String>,
    pub info: Option<String>,
    pub addition: Option<String>,
    pub minute: Option<i64>,
    pub extra_minute: Option<i64>,
    pub injured: Option<bool>,
    pub on_bench: Option<bool>,
    pub coach_id: Option<i64>,
    pub sub_type_id: Option<i64>,
}

/// One team statistic for a fixture, e.g. ball possession.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct FixtureStat {
    pub id: i64,
    pub fixture_id: i64,
    pub type_id: i64,
    pub participant_id: i64,
    pub data: StatValue,
    pub location: Option<ParticipantLocation>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct StatValue {
    pub value: Option<f64>,
}

/// Goals for one side at one point of the fixture (`1ST_HALF`, `2ND_HALF`, `CURRENT`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Score {
    pub id: i64,
    pub fixture_id: i64,
    pub type_id: i64,
    pub participant_id: i64,
    pub score: ScoreDetail,
    #[builder(into)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ScoreDetail {
    pub goals: i64,
    pub participant: ParticipantLocation,
}

/// Formation a side lined up in, e.g. `"4-3-3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Formation {
    pub id: i64,
    pub fixture_id: i64,
    pub participant_id: i64,
    #[builder(into)]
    pub formation: String,
    pub location: ParticipantLocation,
}

/// A player's membership of a team's squad, either the current one or a season's.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SquadMember {
    pub id: i64,
    pub transfer_id: Option<i64>,
    /// Only set on season squads.
    pub season_id: Option<i64>,
    pub player_id: i64,
    pub team_id: i64,
    pub position_id: Option<i64>,
    pub detailed_position_id: Option<i64>,
    pub jersey_number: Option<i64>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub player: Option<Player>,
}

/// One season's top-scorer ranking entry for a player.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TopScorer {
    pub id: i64,
    pub season_id: i64,
    pub player_id: i64,
    /// What is ranked: goals, assists or cards.
    pub type_id: i64,
    pub position: Option<i64>,
    pub total: Option<i64>,
    pub participant_id: Option<i64>,
    pub player: Option<Player>,
    pub participant: Option<Team>,
}

/// A broadcaster showing a fixture.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct TvStation {
    pub id: i64,
    #[builder(into)]
    pub name: String,
    pub url: Option<String>,
    pub image_path: Option<String>,
    /// `tv` or `channel`.
    #[serde(rename = "type")]
    pub station_type: Option<String>,
    pub related_id: Option<i64>,
}

/// A live text comment on a fixture.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Commentary {
    pub id: i64,
    pub fixture_id: i64,
    #[builder(into)]
    pub comment: String,
    pub minute: Option<i64>,
    pub extra_minute: Option<i64>,
    #[serde(default)]
    #[builder(default)]
    pub is_goal: bool,
    #[serde(default)]
    #[builder(default)]
    pub is_important: bool,
    pub order: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Continent {
    pub id: i64,
    #[builder(into)]
    pub name: String,
    pub code: Option<String>,
    pub countries: Option<Vec<Country>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Country {
    pub id: i64,
    pub continent_id: Option<i64>,
    #[builder(into)]
    pub name: String,
    pub official_name: Option<String>,
    pub fifa_name: Option<String>,
    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// ISO3 codes of the neighbouring countries.
    pub borders: Option<Vec<String>>,
    pub image_path: Option<String>,
    pub continent: Option<Box<Continent>>,
}
