use bon::Builder;

use crate::query::{Filters, Include, QueryParams};

pub(crate) const BOOKMAKERS: &str = "/odds/bookmakers";
pub(crate) const PRE_MATCH_ODDS: &str = "/football/odds/pre-match";

/// Request for the pre-match odds of one fixture.
///
/// Narrow the result with the `bookmakers` and `markets` filters.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct PreMatchOddsRequest {
    pub fixture_id: i64,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl PreMatchOddsRequest {
    pub(crate) fn path(&self) -> String {
        format!("{PRE_MATCH_ODDS}/fixtures/{}", self.fixture_id)
    }

    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}
