//! The JSON wrapper every Sportmonks response arrives in.
//!
//! Single-entity endpoints decode into `Envelope<T>` and list endpoints into
//! `Envelope<Vec<T>>`; the shape is fixed by the endpoint method, never
//! inferred from the body.
//!
//! A list query without results is answered with `200`, a `message` and no `data` at all. List
//! endpoints decode that as an empty `Vec`; single-entity endpoints still fail with
//! [`Kind::Decode`](crate::error::Kind::Decode).

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{TimestampSeconds, serde_as, skip_serializing_none};

/// A decoded response: the `data` payload plus the informational fields the API attaches to
/// every call.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Envelope<T> {
    pub data: T,
    /// Only sent by list endpoints.
    pub pagination: Option<Pagination>,
    /// Informational note, e.g. `"No result(s) found matching your request."`.
    #[builder(into)]
    pub message: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub subscription: Vec<Subscription>,
    #[serde(default)]
    #[builder(default)]
    pub rate_limit: RateLimit,
    #[serde(default)]
    #[builder(default, into)]
    pub timezone: String,
}

impl<T> Envelope<T> {
    /// Splits the envelope into its payload and the accompanying metadata.
    pub fn into_parts(self) -> (T, ResponseDetails) {
        (
            self.data,
            ResponseDetails {
                pagination: self.pagination,
                message: self.message,
                subscription: self.subscription,
                rate_limit: self.rate_limit,
                timezone: self.timezone,
            },
        )
    }

    /// Transforms the payload while keeping the metadata untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            pagination: self.pagination,
            message: self.message,
            subscription: self.subscription,
            rate_limit: self.rate_limit,
            timezone: self.timezone,
        }
    }
}

impl<T> Envelope<Option<Vec<T>>> {
    /// Resolves an absent or `null` list to an empty one.
    pub(crate) fn into_list(self) -> Envelope<Vec<T>> {
        self.map(Option::unwrap_or_default)
    }
}

/// Everything in an [`Envelope`] except `data`.
#[derive(Debug, Clone, PartialEq, Default)]
#[non_exhaustive]
pub struct ResponseDetails {
    pub pagination: Option<Pagination>,
    pub message: Option<String>,
    pub subscription: Vec<Subscription>,
    pub rate_limit: RateLimit,
    pub timezone: String,
}

/// Page position of a list response. Following `next_page` is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Pagination {
    pub count: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub next_page: Option<String>,
    pub has_more: bool,
}

/// Remaining request budget for the entity that was just queried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct RateLimit {
    #[serde(default)]
    #[builder(default)]
    pub resets_in_seconds: i64,
    #[serde(default)]
    #[builder(default)]
    pub remaining: i64,
    #[serde(default)]
    #[builder(default, into)]
    pub requested_entity: String,
}

/// One of the subscriptions attached to the API token.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Subscription {
    pub meta: Option<SubscriptionMeta>,
    #[serde(default)]
    #[builder(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    #[builder(default)]
    pub add_ons: Vec<serde_json::Value>,
    #[serde(default)]
    #[builder(default)]
    pub widgets: Vec<serde_json::Value>,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SubscriptionMeta {
    pub trial_ends_at: Option<String>,
    pub ends_at: Option<String>,
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    pub current_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[non_exhaustive]
pub struct Plan {
    pub plan: String,
    pub sport: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_should_decode_metadata() {
        let json = serde_json::json!({
            "data": [1, 2, 3],
            "pagination": {
                "count": 3,
                "per_page": 25,
                "current_page": 1,
                "next_page": null,
                "has_more": false
            },
            "subscription": [{
                "meta": {
                    "trial_ends_at": null,
                    "ends_at": "2026-12-31 23:59:59",
                    "current_timestamp": 1_700_000_000
                },
                "plans": [{ "plan": "Football Free Plan", "sport": "Football", "category": "Standard" }],
                "add_ons": [],
                "widgets": []
            }],
            "rate_limit": { "resets_in_seconds": 3412, "remaining": 2998, "requested_entity": "Fixture" },
            "timezone": "UTC"
        });

        let envelope: Envelope<Vec<i64>> = serde_json::from_value(json).expect("valid envelope");
        let (data, details) = envelope.into_parts();

        assert_eq!(data, vec![1, 2, 3]);
        let pagination = details.pagination.expect("pagination");
        assert_eq!(pagination.per_page, 25);
        assert!(!pagination.has_more);
        assert_eq!(details.rate_limit.remaining, 2998);
        assert_eq!(details.rate_limit.requested_entity, "Fixture");
        assert_eq!(details.timezone, "UTC");
        assert_eq!(details.subscription.len(), 1);
        assert_eq!(details.subscription[0].plans[0].plan, "Football Free Plan");
        let meta = details.subscription[0].meta.as_ref().expect("meta");
        assert_eq!(
            meta.current_timestamp.map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }

    #[test]
    fn single_envelope_should_not_have_pagination() {
        let json = serde_json::json!({
            "data": { "id": 7 },
            "subscription": [],
            "rate_limit": { "resets_in_seconds": 10, "remaining": 1, "requested_entity": "League" },
            "timezone": "Europe/Amsterdam"
        });

        let envelope: Envelope<serde_json::Value> =
            serde_json::from_value(json).expect("valid envelope");

        assert!(envelope.pagination.is_none());
        assert_eq!(envelope.data["id"], 7);
        assert_eq!(envelope.timezone, "Europe/Amsterdam");
    }

    #[test]
    fn list_body_for_single_shape_should_fail() {
        let json = serde_json::json!({ "data": [{ "id": 7 }] });

        serde_json::from_value::<Envelope<Plan>>(json).unwrap_err();
    }

    #[test]
    fn list_without_data_should_be_empty() {
        let json = serde_json::json!({
            "message": "No result(s) found matching your request. Either the query did not return any results or you don't have access to it via your current subscription.",
            "subscription": [],
            "rate_limit": { "resets_in_seconds": 3600, "remaining": 2999, "requested_entity": "Fixture" },
            "timezone": "UTC"
        });

        let envelope: Envelope<Option<Vec<i64>>> =
            serde_json::from_value(json).expect("valid envelope");
        let envelope = envelope.into_list();

        assert!(envelope.data.is_empty());
        assert!(envelope.message.is_some_and(|m| m.starts_with("No result(s) found")));
        assert_eq!(envelope.rate_limit.remaining, 2999);
    }

    #[test]
    fn list_with_null_data_should_be_empty() {
        let json = serde_json::json!({ "data": null, "timezone": "UTC" });

        let envelope: Envelope<Option<Vec<i64>>> =
            serde_json::from_value(json).expect("valid envelope");

        assert!(envelope.into_list().data.is_empty());
    }

    #[test]
    fn single_without_data_should_fail() {
        let json = serde_json::json!({ "message": "No result(s) found", "timezone": "UTC" });

        serde_json::from_value::<Envelope<Plan>>(json).unwrap_err();
    }

    #[test]
    fn map_should_keep_metadata() {
        let envelope = Envelope::builder()
            .data(vec![1, 2])
            .timezone("UTC")
            .build()
            .map(|v| v.len());

        assert_eq!(envelope.data, 2);
        assert_eq!(envelope.timezone, "UTC");
    }
}
