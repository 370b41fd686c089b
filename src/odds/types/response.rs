use bon::Builder;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as, skip_serializing_none};

use crate::serde_helpers::SportmonksDateTime;
use crate::types::Decimal;

/// A bookmaker whose prices Sportmonks aggregates.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Bookmaker {
    pub id: i64,
    pub legacy_id: Option<i64>,
    #[builder(into)]
    pub name: String,
}

/// A betting market, e.g. "Fulltime Result".
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Market {
    pub id: i64,
    pub legacy_id: Option<i64>,
    #[builder(into)]
    pub name: String,
    pub developer_name: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub has_winning_calculations: bool,
}

/// One price offered by one bookmaker for one outcome of a market.
///
/// `value` is the decimal price. The API sends it as a string (`"1.85"`); plain JSON numbers are
/// accepted too.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Odd {
    pub id: i64,
    pub fixture_id: i64,
    pub market_id: i64,
    pub bookmaker_id: i64,
    /// Outcome label, e.g. `Home`, `Draw`, `Over`.
    #[builder(into)]
    pub label: String,
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub value: Decimal,
    pub name: Option<String>,
    pub sort_order: Option<i64>,
    pub market_description: Option<String>,
    /// Implied probability, e.g. `"54.05%"`.
    pub probability: Option<String>,
    pub dp3: Option<String>,
    pub fractional: Option<String>,
    pub american: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub winning: bool,
    #[serde(default)]
    #[builder(default)]
    pub stopped: bool,
    pub total: Option<String>,
    pub handicap: Option<String>,
    pub participants: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub original_label: Option<String>,
    #[serde_as(as = "Option<SportmonksDateTime>")]
    pub latest_bookmaker_update: Option<NaiveDateTime>,
    pub bookmaker: Option<Bookmaker>,
    pub market: Option<Market>,
}
