//! `SearchFilterState` <-> `q[<field>_<predicate>]` query parameters.
//!
//! Prices travel in cents and live in major units in the state. Anything
//! missing or unparsable decodes to its default; nothing here fails.

use crate::domain::ListingStatus;
use crate::forms::FormData;
use crate::search::{SearchContext, SearchFilterState, DEFAULT_OBJECTIVE};
use std::collections::BTreeSet;
use url::form_urlencoded;

pub const TITLE_CONT: &str = "title_cont";
pub const STATUS_EQ: &str = "status_eq";
pub const KIND_EQ: &str = "kind_eq";
pub const OBJECTIVE_EQ: &str = "objective_eq";
pub const PRICE_GTEQ: &str = "price_cents_gteq";
pub const PRICE_LTEQ: &str = "price_cents_lteq";

/// `title_cont` -> `q[title_cont]`
pub fn q_key(predicate: &str) -> String {
    format!("q[{predicate}]")
}

/// Nested key first, flattened legacy key as fallback.
fn lookup<'a>(params: &'a FormData, predicate: &str) -> Option<&'a str> {
    params
        .get(&q_key(predicate))
        .or_else(|| params.get(predicate))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn lookup_i64(params: &FormData, predicate: &str) -> Option<i64> {
    lookup(params, predicate).and_then(|v| v.parse().ok())
}

/// Lower bounds round down and upper bounds round up, so a bound between
/// two whole units never excludes a listing priced exactly on it.
fn cents_to_major_floor(cents: i64) -> i64 {
    cents.div_euclid(100)
}

fn cents_to_major_ceil(cents: i64) -> i64 {
    cents.div_euclid(100) + i64::from(cents.rem_euclid(100) != 0)
}

fn major_to_cents(major: i64) -> i64 {
    major.saturating_mul(100)
}

/// The objective the URL carries, if any.
pub fn encoded_objective(params: &FormData) -> Option<i64> {
    lookup_i64(params, OBJECTIVE_EQ).filter(|o| *o > 0)
}

pub fn decode(params: &FormData, ctx: &SearchContext) -> SearchFilterState {
    let mut state = SearchFilterState::new(ctx.max_price);

    state.title = lookup(params, TITLE_CONT).unwrap_or("").to_string();
    state.status = lookup(params, STATUS_EQ).and_then(ListingStatus::parse);
    state.kind = lookup_i64(params, KIND_EQ).filter(|k| *k > 0).unwrap_or(0);
    state.objective = encoded_objective(params).unwrap_or(DEFAULT_OBJECTIVE);

    let min = lookup_i64(params, PRICE_GTEQ)
        .map(cents_to_major_floor)
        .unwrap_or(0);
    let max = lookup_i64(params, PRICE_LTEQ)
        .map(cents_to_major_ceil)
        .unwrap_or(ctx.max_price);
    state.set_price_range(min, max);

    for key in &ctx.stats_keys {
        if let Some(value) = lookup(params, &format!("{key}_eq")) {
            state.stat_filters.insert(key.clone(), value.to_string());
        }
    }

    state
}

/// Only meaningful values are emitted, except `objective`, which always is.
/// Stat filters whose key is not a current stats key are dropped.
pub fn encode(state: &SearchFilterState, ctx: &SearchContext) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    let title = state.title.trim();
    if !title.is_empty() {
        pairs.push((q_key(TITLE_CONT), title.to_string()));
    }
    if let Some(status) = state.status {
        pairs.push((q_key(STATUS_EQ), status.code().to_string()));
    }
    if state.kind != 0 {
        pairs.push((q_key(KIND_EQ), state.kind.to_string()));
    }
    pairs.push((q_key(OBJECTIVE_EQ), state.objective.to_string()));

    let (min, max) = state.price_range;
    if min != 0 {
        pairs.push((q_key(PRICE_GTEQ), major_to_cents(min).to_string()));
    }
    if max != ctx.max_price {
        pairs.push((q_key(PRICE_LTEQ), major_to_cents(max).to_string()));
    }

    let mut seen = BTreeSet::new();
    for (key, value) in &state.stat_filters {
        let name = key.strip_suffix("_eq").unwrap_or(key);
        let value = value.trim();
        if value.is_empty() || !ctx.knows_stat(name) || !seen.insert(name) {
            continue;
        }
        pairs.push((q_key(&format!("{name}_eq")), value.to_string()));
    }

    pairs
}

fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Joins pairs into a query string (no leading `?`). Brackets in keys stay
/// literal so links read `q[kind_eq]=2`.
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            let key = encode_component(k).replace("%5B", "[").replace("%5D", "]");
            format!("{key}={}", encode_component(v))
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const MAX: i64 = 5_000_000;

    fn ctx() -> SearchContext {
        SearchContext::new(vec!["Quartos".to_string(), "Vagas".to_string()], MAX)
    }

    fn round_trip(state: &SearchFilterState) -> SearchFilterState {
        let query = to_query_string(&encode(state, &ctx()));
        decode(&FormData::parse(&query), &ctx())
    }

    #[test]
    fn meaningful_state_survives_the_url() {
        let mut stats = BTreeMap::new();
        stats.insert("Quartos".to_string(), "3".to_string());
        stats.insert("Vagas".to_string(), "2".to_string());
        let state = SearchFilterState {
            title: "cobertura & vista".to_string(),
            status: Some(ListingStatus::Sold),
            kind: 2,
            objective: 2,
            price_range: (150_000, 900_000),
            stat_filters: stats,
        };
        assert_eq!(round_trip(&state), state);
    }

    #[test]
    fn default_state_encodes_objective_only() {
        let state = SearchFilterState::new(MAX);
        assert_eq!(to_query_string(&encode(&state, &ctx())), "q[objective_eq]=1");
    }

    #[test]
    fn stale_stat_keys_are_dropped() {
        let ctx = SearchContext::new(vec!["Quartos".to_string()], MAX);
        let mut state = SearchFilterState::new(MAX);
        state
            .stat_filters
            .insert("Quartos_eq".to_string(), "2".to_string());
        state
            .stat_filters
            .insert("Piscina_eq".to_string(), "yes".to_string());

        let query = to_query_string(&encode(&state, &ctx));
        assert_eq!(query, "q[objective_eq]=1&q[Quartos_eq]=2");
        assert!(!query.contains("Piscina"));
    }

    #[test]
    fn prices_cross_the_boundary_in_cents() {
        let mut state = SearchFilterState::new(MAX);
        state.set_price_range(1000, 2000);

        let query = to_query_string(&encode(&state, &ctx()));
        assert!(query.contains("q[price_cents_gteq]=100000&q[price_cents_lteq]=200000"));

        let decoded = decode(&FormData::parse(&query), &ctx());
        assert_eq!(decoded.price_range, (1000, 2000));
    }

    #[test]
    fn fractional_bounds_widen_to_whole_units() {
        let state = decode(
            &FormData::parse("q[price_cents_gteq]=99950&q[price_cents_lteq]=150050"),
            &ctx(),
        );
        assert_eq!(state.price_range, (999, 1501));

        let exact = decode(&FormData::parse("q[price_cents_lteq]=150000"), &ctx());
        assert_eq!(exact.price_range, (0, 1500));
    }

    #[test]
    fn garbage_degrades_to_defaults() {
        let params = FormData::parse(
            "q[kind_eq]=abc&q[objective_eq]=-3&q[status_eq]=9&q[price_cents_gteq]=x&q[price_cents_lteq]=",
        );
        let state = decode(&params, &ctx());
        assert!(state.is_default(MAX));
    }

    #[test]
    fn decode_accepts_flattened_keys_and_ignores_unknown_stats() {
        let params = FormData::parse("title_cont=loft&kind_eq=3&q[Piscina_eq]=sim&q[Vagas_eq]=1");
        let state = decode(&params, &ctx());
        assert_eq!(state.title, "loft");
        assert_eq!(state.kind, 3);
        assert_eq!(state.stat("Vagas"), "1");
        assert!(!state.stat_filters.contains_key("Piscina"));
    }

    #[test]
    fn status_name_decodes_and_encodes_as_code() {
        let state = decode(&FormData::parse("q[status_eq]=rented"), &ctx());
        assert_eq!(state.status, Some(ListingStatus::Rented));
        assert!(to_query_string(&encode(&state, &ctx())).contains("q[status_eq]=4"));
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let pairs = vec![(q_key("Suítes_eq"), "2 ou +".to_string())];
        assert_eq!(to_query_string(&pairs), "q[Su%C3%ADtes_eq]=2+ou+%2B");
    }
}
