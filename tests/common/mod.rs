#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Not every test binary uses every helper"
)]

use std::time::Duration;

use httpmock::MockServer;
use serde_json::{Value, json};
use sportmonks_client_sdk::{Client, Config};

pub const API_TOKEN: &str = "test-api-token";
pub const FIXTURE_ID: i64 = 18_535_517;

#[must_use]
pub fn client(server: &MockServer) -> Client {
    let config = Config::builder().base_url(server.base_url()).build();
    Client::with_config(API_TOKEN, config).unwrap()
}

#[must_use]
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> Client {
    let config = Config::builder()
        .base_url(server.base_url())
        .timeout(timeout)
        .build();
    Client::with_config(API_TOKEN, config).unwrap()
}

/// Wraps `data` the way the API does, with one subscription and a rate-limit block.
#[must_use]
pub fn envelope(data: Value, requested_entity: &str) -> Value {
    json!({
        "data": data,
        "subscription": [{
            "meta": {
                "trial_ends_at": null,
                "ends_at": "2026-12-31 23:59:59",
                "current_timestamp": 1_700_000_000
            },
            "plans": [{ "plan": "Football Advanced", "sport": "Football", "category": "Advanced" }],
            "add_ons": [],
            "widgets": []
        }],
        "rate_limit": {
            "resets_in_seconds": 3412,
            "remaining": 2998,
            "requested_entity": requested_entity
        },
        "timezone": "UTC"
    })
}

/// Same as [`envelope`] plus a `pagination` block, as list endpoints send.
#[must_use]
pub fn paged_envelope(data: Value, requested_entity: &str, has_more: bool) -> Value {
    let count = data.as_array().map_or(0, Vec::len);
    let mut body = envelope(data, requested_entity);
    body["pagination"] = json!({
        "count": count,
        "per_page": 25,
        "current_page": 1,
        "next_page": if has_more {
            Value::from("https://api.sportmonks.com/v3/football/fixtures?page=2")
        } else {
            Value::Null
        },
        "has_more": has_more
    });
    body
}

#[must_use]
pub fn fixture_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "sport_id": 1,
        "league_id": 501,
        "season_id": 19_735,
        "stage_id": 77_457_866,
        "group_id": null,
        "aggregate_id": null,
        "round_id": 274_719,
        "state_id": 5,
        "venue_id": 8909,
        "name": name,
        "starting_at": "2023-01-14 12:30:00",
        "result_info": null,
        "leg": "1/1",
        "details": null,
        "length": 90,
        "placeholder": false,
        "has_odds": true,
        "has_premium_odds": false,
        "starting_at_timestamp": 1_673_699_400
    })
}
