use crate::domain::ListingStatus;
use crate::domain::listing::stat_field_name;
use crate::forms::FormData;
use crate::search::SearchContext;
use std::collections::BTreeMap;

pub const DEFAULT_OBJECTIVE: i64 = 1;

/// In-memory shape of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilterState {
    pub title: String,
    /// `None` means every status.
    pub status: Option<ListingStatus>,
    /// `0` means every kind.
    pub kind: i64,
    pub objective: i64,
    /// Inclusive bounds in major currency units, never crossing.
    pub price_range: (i64, i64),
    /// Stat name to required value, e.g. "Quartos" -> "2".
    pub stat_filters: BTreeMap<String, String>,
}

impl SearchFilterState {
    pub fn new(max_price: i64) -> Self {
        Self {
            title: String::new(),
            status: None,
            kind: 0,
            objective: DEFAULT_OBJECTIVE,
            price_range: (0, max_price.max(0)),
            stat_filters: BTreeMap::new(),
        }
    }

    pub fn reset(&mut self, max_price: i64) {
        *self = Self::new(max_price);
    }

    /// Stores the bounds ordered and non-negative.
    pub fn set_price_range(&mut self, min: i64, max: i64) {
        self.price_range = normalize_range(min, max);
    }

    /// Builds state from the plain field names the search form submits
    /// (`title`, `status`, `kind`, `objective`, `price_min`, `price_max`,
    /// `stat[<key>]`). Prices are in major units here.
    pub fn from_form(form: &FormData, ctx: &SearchContext) -> Self {
        let mut state = Self::new(ctx.max_price);

        state.title = form.get_trimmed("title").unwrap_or("").to_string();
        state.status = form.get_trimmed("status").and_then(ListingStatus::parse);
        state.kind = form.get_i64("kind").filter(|k| *k > 0).unwrap_or(0);
        state.objective = form
            .get_i64("objective")
            .filter(|o| *o > 0)
            .unwrap_or(DEFAULT_OBJECTIVE);

        let min = form.get_i64("price_min").unwrap_or(0);
        let max = form.get_i64("price_max").unwrap_or(ctx.max_price);
        state.set_price_range(min, max);

        for key in &ctx.stats_keys {
            if let Some(value) = form.get_trimmed(&stat_field_name(key)) {
                state.stat_filters.insert(key.clone(), value.to_string());
            }
        }

        state
    }

    pub fn is_default(&self, max_price: i64) -> bool {
        *self == Self::new(max_price)
    }

    pub fn stat(&self, key: &str) -> &str {
        self.stat_filters.get(key).map(String::as_str).unwrap_or("")
    }
}

fn normalize_range(min: i64, max: i64) -> (i64, i64) {
    let (min, max) = (min.max(0), max.max(0));
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SearchContext {
        SearchContext::new(vec!["Quartos".to_string()], 5_000_000)
    }

    #[test]
    fn crossing_bounds_are_swapped() {
        let mut state = SearchFilterState::new(100);
        state.set_price_range(80, 20);
        assert_eq!(state.price_range, (20, 80));
        state.set_price_range(-5, 10);
        assert_eq!(state.price_range, (0, 10));
    }

    #[test]
    fn from_form_reads_plain_fields() {
        let form = FormData::parse(
            "title=+loft+&status=2&kind=3&objective=2&price_min=1000&price_max=2000&stat%5BQuartos%5D=2&stat%5BPiscina%5D=sim",
        );
        let state = SearchFilterState::from_form(&form, &ctx());
        assert_eq!(state.title, "loft");
        assert_eq!(state.status, Some(ListingStatus::Agreed));
        assert_eq!(state.kind, 3);
        assert_eq!(state.objective, 2);
        assert_eq!(state.price_range, (1000, 2000));
        assert_eq!(state.stat("Quartos"), "2");
        assert!(!state.stat_filters.contains_key("Piscina"));
    }

    #[test]
    fn empty_form_is_default() {
        let state = SearchFilterState::from_form(&FormData::default(), &ctx());
        assert!(state.is_default(5_000_000));
    }
}
