//! Odds endpoints on [`Client`].

use super::types::request::{BOOKMAKERS, PreMatchOddsRequest};
use super::types::response::{Bookmaker, Odd};
use crate::Result;
use crate::client::Client;
use crate::envelope::Envelope;
use crate::query::{ByIdRequest, ListRequest};

impl Client {
    /// Retrieves a bookmaker by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn bookmaker_by_id(&self, request: &ByIdRequest) -> Result<Envelope<Bookmaker>> {
        self.get(&format!("{BOOKMAKERS}/{}", request.id), request.query())
            .await
    }

    /// Retrieves one page of bookmakers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn bookmakers(&self, request: &ListRequest) -> Result<Envelope<Vec<Bookmaker>>> {
        self.get_list(BOOKMAKERS, request.query()).await
    }

    /// Retrieves every pre-match price for a fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn pre_match_odds_by_fixture(
        &self,
        request: &PreMatchOddsRequest,
    ) -> Result<Envelope<Vec<Odd>>> {
        self.get_list(&request.path(), request.query()).await
    }
}
