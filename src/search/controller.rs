use crate::forms::FormData;
use crate::search::codec::{self, encoded_objective};
use crate::search::{SearchConfig, SearchContext, SearchFilterState, DEFAULT_OBJECTIVE};
use tracing::debug;

/// Navigation primitive: go to `path` with `query` (no leading `?`, may be empty).
pub trait Navigator {
    fn navigate(&mut self, path: &str, query: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, path: &str, query: &str) {
        (**self).navigate(path, query)
    }
}

/// Remembers the last navigation so a handler can answer with a redirect.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    location: Option<String>,
}

impl RedirectNavigator {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str, query: &str) {
        self.location = Some(if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        });
    }
}

/// Drives one search form: submit, reset, and the objective auto-submit.
pub struct SearchController<'a, N: Navigator> {
    config: &'a SearchConfig,
    ctx: &'a SearchContext,
    state: SearchFilterState,
    /// Objective encoded in the URL the form was rendered from.
    url_objective: Option<i64>,
    navigator: N,
}

impl<'a, N: Navigator> SearchController<'a, N> {
    /// State comes from the current URL so reloads and shared links reproduce it.
    pub fn mount(
        config: &'a SearchConfig,
        ctx: &'a SearchContext,
        url: &FormData,
        navigator: N,
    ) -> Self {
        Self {
            config,
            ctx,
            state: codec::decode(url, ctx),
            url_objective: encoded_objective(url),
            navigator,
        }
    }

    pub fn state(&self) -> &SearchFilterState {
        &self.state
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SearchFilterState {
        &mut self.state
    }

    /// Take every field from a submitted form.
    pub fn replace_state(&mut self, state: SearchFilterState) {
        self.state = state;
    }

    pub fn submit(&mut self) {
        let query = codec::to_query_string(&codec::encode(&self.state, self.ctx));
        debug!(form = self.config.id, %query, "search submitted");
        self.navigator.navigate(&self.config.results_path, &query);
        self.url_objective = Some(self.state.objective);
    }

    pub fn reset(&mut self) {
        self.state.reset(self.ctx.max_price);
        self.url_objective = None;
        debug!(form = self.config.id, "search reset");
        self.navigator.navigate(&self.config.results_path, "");
    }

    /// Buy/rent tabs act as an instant filter.
    pub fn set_objective(&mut self, objective: i64) -> bool {
        self.state.objective = objective;
        self.sync_objective()
    }

    /// Submits once if the in-memory objective differs from the URL's.
    /// With no objective in the URL, the default value is already in sync.
    pub fn sync_objective(&mut self) -> bool {
        let out_of_sync = match self.url_objective {
            Some(encoded) => encoded != self.state.objective,
            None => self.state.objective != DEFAULT_OBJECTIVE,
        };
        if out_of_sync {
            self.submit();
        }
        out_of_sync
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}
