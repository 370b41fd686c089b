//! Query-string encoding shared by every endpoint.
//!
//! Sportmonks takes two kinds of query input besides the API token:
//!
//! - `include`: relations to eager-load, joined with `;` (`include=lineups;events`)
//! - filters: a name mapped to integer ids, joined with `,` (`fixtureLeagues=8,82`)
//!
//! [`QueryParams`] has set semantics, so later writes to a key replace earlier ones.

use std::collections::{BTreeMap, HashMap};

use bon::Builder;
use serde::Serialize;

pub(crate) const INCLUDE: &str = "include";
pub(crate) const PAGE: &str = "page";
pub(crate) const API_TOKEN: &str = "api_token";

/// Ordered list of relations to populate on the returned entities.
///
/// ```
/// use sportmonks_client_sdk::query::Include;
///
/// let include = Include::from(["lineups", "events"]);
/// assert_eq!(include.encode(), "lineups;events");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Include(Vec<String>);

impl Include {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a relation, keeping insertion order.
    #[must_use]
    pub fn with<S: Into<String>>(mut self, relation: S) -> Self {
        self.0.push(relation.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Renders the `include` value. An empty list renders as the empty string.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0.join(";")
    }
}

impl<S: Into<String>> FromIterator<S> for Include {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Include {
    fn from(relations: [&str; N]) -> Self {
        relations.into_iter().collect()
    }
}

impl From<&[&str]> for Include {
    fn from(relations: &[&str]) -> Self {
        relations.iter().copied().collect()
    }
}

impl From<Vec<String>> for Include {
    fn from(relations: Vec<String>) -> Self {
        Self(relations)
    }
}

impl From<Vec<&str>> for Include {
    fn from(relations: Vec<&str>) -> Self {
        relations.into_iter().collect()
    }
}

/// Filter name to integer values, e.g. `fixtureLeagues => [8, 82]`.
///
/// A filter with no values is still sent, with an empty value.
///
/// ```
/// use sportmonks_client_sdk::query::Filters;
///
/// let filters = Filters::new().with("fixtureLeagues", [8, 82]);
/// assert_eq!(filters.get("fixtureLeagues").as_deref(), Some("8,82"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Filters(BTreeMap<String, Vec<i64>>);

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `values`, replacing any values previously set for it.
    #[must_use]
    pub fn with<K: Into<String>, V: IntoIterator<Item = i64>>(mut self, name: K, values: V) -> Self {
        self.0.insert(name.into(), values.into_iter().collect());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encoded value for `name`, if that filter is set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|values| join_ids(values))
    }

    /// Writes every filter into `query`, one parameter per filter name.
    pub fn apply(&self, query: &mut QueryParams) {
        for (name, values) in &self.0 {
            query.set(name.clone(), join_ids(values));
        }
    }
}

impl<K: Into<String>, V: IntoIterator<Item = i64>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |filters, (name, values)| {
                filters.with(name, values)
            })
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, Vec<i64>, S>> for Filters {
    fn from(map: HashMap<String, Vec<i64>, S>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, Vec<i64>>> for Filters {
    fn from(map: BTreeMap<String, Vec<i64>>) -> Self {
        Self(map)
    }
}

/// Renders ids as `1,2,3`: decimal, comma-separated, no brackets or spaces.
pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Query-string parameters for one request, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Starts a parameter set holding `include`, then every filter.
    #[must_use]
    pub fn new(include: &Include, filters: Option<&Filters>) -> Self {
        let mut query = Self::default();
        query.set(INCLUDE, include.encode());
        if let Some(filters) = filters {
            filters.apply(&mut query);
        }
        query
    }

    /// Sets `name` to `value`, overwriting any previous value.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Request for a single resource by its numeric id.
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
pub struct ByIdRequest {
    pub id: i64,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl ByIdRequest {
    pub(crate) fn query(&self) -> QueryParams {
        QueryParams::new(&self.include, Some(&self.filters))
    }
}

/// Request for a paged collection of resources.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder)]
pub struct ListRequest {
    /// Page to fetch, starting at 1. `None` lets the API pick the first page.
    pub page: Option<u32>,
    #[builder(default, into)]
    pub include: Include,
    #[builder(default, into)]
    pub filters: Filters,
}

impl ListRequest {
    pub(crate) fn query(&self) -> QueryParams {
        let mut query = QueryParams::new(&self.include, Some(&self.filters));
        if let Some(page) = self.page {
            query.set(PAGE, page.to_string());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_should_join_with_commas() {
        let filters = Filters::new().with("leagues", [8, 82]);

        assert_eq!(filters.get("leagues").as_deref(), Some("8,82"));
    }

    #[test]
    fn filters_should_render_negative_and_large_ids() {
        let filters = Filters::new().with("ids", [-1, 0, i64::MAX]);

        assert_eq!(
            filters.get("ids").as_deref(),
            Some("-1,0,9223372036854775807")
        );
    }

    #[test]
    fn empty_filter_should_be_kept_as_empty_value() {
        let mut query = QueryParams::default();
        Filters::new()
            .with("fixtureStates", Vec::<i64>::new())
            .apply(&mut query);

        assert_eq!(query.get("fixtureStates"), Some(""));
    }

    #[test]
    fn setting_a_filter_twice_should_overwrite() {
        let filters = Filters::new().with("leagues", [1]).with("leagues", [2, 3]);

        assert_eq!(filters.get("leagues").as_deref(), Some("2,3"));
    }

    #[test]
    fn filters_from_hash_map_should_succeed() {
        let map = HashMap::from([("seasons".to_owned(), vec![19_734, 21_646])]);

        let filters = Filters::from(map);

        assert_eq!(filters.get("seasons").as_deref(), Some("19734,21646"));
    }

    #[test]
    fn include_should_join_with_semicolons() {
        let include = Include::from(["lineups", "events", "participants"]);

        assert_eq!(include.encode(), "lineups;events;participants");
    }

    #[test]
    fn include_built_incrementally_should_keep_order() {
        let include = Include::new()
            .with("participants")
            .with("scores".to_owned())
            .with("participants.country");

        assert!(!include.is_empty());
        assert_eq!(
            include.iter().collect::<Vec<_>>(),
            ["participants", "scores", "participants.country"]
        );
        assert_eq!(include.encode(), "participants;scores;participants.country");
    }

    #[test]
    fn empty_include_should_encode_as_empty_string() {
        let query = QueryParams::new(&Include::new(), None);

        assert_eq!(query.get(INCLUDE), Some(""));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn filter_named_include_should_replace_include() {
        let include = Include::from(["lineups"]);
        let filters = Filters::new().with(INCLUDE, [1]);

        let query = QueryParams::new(&include, Some(&filters));

        assert_eq!(query.get(INCLUDE), Some("1"));
    }

    #[test]
    fn list_request_should_set_page() {
        let request = ListRequest::builder().page(3).include(["country"]).build();

        let query = request.query();

        assert_eq!(query.get(PAGE), Some("3"));
        assert_eq!(query.get(INCLUDE), Some("country"));
    }

    #[test]
    fn query_params_should_serialize_as_flat_map() -> Result<(), Box<dyn std::error::Error>> {
        let query = QueryParams::new(
            &Include::from(["lineups", "events"]),
            Some(&Filters::new().with("leagues", [8, 82])),
        );

        let encoded = serde_json::to_value(&query)?;

        assert_eq!(
            encoded,
            serde_json::json!({ "include": "lineups;events", "leagues": "8,82" })
        );
        Ok(())
    }
}
