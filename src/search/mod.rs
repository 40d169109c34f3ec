//! Search-filter state and its round trip through the URL.
//!
//! A [`SearchFilterState`] is rebuilt from the query string on every request,
//! edited through the search form, and serialized back into the
//! `q[<field>_<predicate>]` convention by [`codec::encode`]. The
//! [`SearchController`] owns the submit/reset/objective-sync flow and talks to
//! the outside world only through a [`Navigator`].

pub mod codec;
pub mod config;
pub mod controller;
pub mod filters;

pub use codec::{decode, encode, to_query_string};
pub use config::{SearchConfig, SearchContext, SearchFields};
pub use controller::{Navigator, RedirectNavigator, SearchController};
pub use filters::{SearchFilterState, DEFAULT_OBJECTIVE};
