//! Types for the Odds API.

pub mod request;
pub mod response;
