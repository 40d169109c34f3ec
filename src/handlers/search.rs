// src/handlers/search.rs
//! The three endpoints behind every search form. They all answer with a
//! redirect to the form's results page, so the URL stays the single source
//! of filter state.

use crate::app::{is_htmx, App};
use crate::domain::{ListingSummary, Page};
use crate::db::listings::search_listings;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::responses::{hx_redirect, no_content, see_other, ResultResp};
use crate::search::{
    decode, RedirectNavigator, SearchConfig, SearchContext, SearchController, SearchFilterState,
};
use astra::Request;

/// Decoded state plus the page of results it selects.
pub struct SearchResults {
    pub ctx: SearchContext,
    pub state: SearchFilterState,
    pub page: Page<ListingSummary>,
}

pub fn load_results(app: &App, params: &FormData) -> Result<SearchResults, ServerError> {
    app.db.with_conn(|conn| {
        let ctx = app.search_context(conn)?;
        let state = decode(params, &ctx);
        let page = search_listings(
            conn,
            &state,
            &ctx,
            params.get_i64("page"),
            app.settings.per_page,
        )?;
        Ok(SearchResults { ctx, state, page })
    })
}

fn redirect_to(req: &Request, navigator: RedirectNavigator) -> ResultResp {
    let location = navigator.location().ok_or(ServerError::InternalError)?;
    if is_htmx(req) {
        hx_redirect(location)
    } else {
        see_other(location)
    }
}

/// `GET {results}/search`: plain form fields in, canonical `q[...]` URL out.
pub fn submit(req: &Request, app: &App, config: &SearchConfig) -> ResultResp {
    let form = FormData::from_query(req);
    let ctx = app.db.with_conn(|conn| app.search_context(conn))?;

    let mut controller =
        SearchController::mount(config, &ctx, &FormData::default(), RedirectNavigator::default());
    controller.replace_state(SearchFilterState::from_form(&form, &ctx));
    controller.submit();

    redirect_to(req, controller.into_navigator())
}

/// `GET {results}/search/reset`: back to the bare results path.
pub fn reset(req: &Request, app: &App, config: &SearchConfig) -> ResultResp {
    let form = FormData::from_query(req);
    let current = FormData::parse(form.get("current_query").unwrap_or(""));
    let ctx = app.db.with_conn(|conn| app.search_context(conn))?;

    let mut controller =
        SearchController::mount(config, &ctx, &current, RedirectNavigator::default());
    controller.reset();

    redirect_to(req, controller.into_navigator())
}

/// `GET {results}/search/objective`: fired by the buy/rent radios. Submits
/// only when the chosen objective differs from the one in `current_query`,
/// otherwise answers 204 and the page stays put.
pub fn objective(req: &Request, app: &App, config: &SearchConfig) -> ResultResp {
    let form = FormData::from_query(req);
    let current = FormData::parse(form.get("current_query").unwrap_or(""));
    let ctx = app.db.with_conn(|conn| app.search_context(conn))?;

    let mut controller =
        SearchController::mount(config, &ctx, &current, RedirectNavigator::default());
    controller.replace_state(SearchFilterState::from_form(&form, &ctx));

    if !controller.sync_objective() {
        return no_content();
    }
    redirect_to(req, controller.into_navigator())
}
