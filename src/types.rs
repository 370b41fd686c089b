//! Third-party types that appear in request and response fields.
//!
//! Building a request date or comparing an odds price needs no extra entries in your
//! `Cargo.toml`.

/// Date and time types for request dates and response timestamps.
pub use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
/// Arbitrary precision decimal type for odds values.
pub use rust_decimal::Decimal;
/// Macro for creating [`Decimal`] literals at compile time.
///
/// # Example
/// ```
/// use sportmonks_client_sdk::types::dec;
/// let odds = dec!(1.85);
/// ```
pub use rust_decimal_macros::dec;
/// Secret string type that redacts the API token in debug output.
pub use secrecy::SecretString;
