// src/handlers/public.rs
use crate::app::{is_dark, is_local_path, theme_cookie, App};
use crate::db::complexes::{get_complex, list_complexes};
use crate::db::listings::{featured_listings, get_listing, listings_for_complex};
use crate::db::posts::{get_post, latest_posts, published_posts};
use crate::db::testimonials::list_testimonials;
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers::search::load_results;
use crate::responses::{html_response, see_other_with_cookie, ResultResp};
use crate::search::{SearchConfig, SearchFilterState};
use crate::templates::pages::{
    about_page, complex_page, complexes_page, home_page, listing_page, listings_page, post_page,
    posts_page, HomeVm, ListingsVm,
};
use astra::Request;

const HOME_FEATURED: usize = 6;
const HOME_POSTS: usize = 3;
const HOME_TESTIMONIALS: usize = 3;

pub fn home(req: &Request, app: &App) -> ResultResp {
    let (ctx, featured, posts, testimonials) = app.db.with_conn(|conn| {
        Ok((
            app.search_context(conn)?,
            featured_listings(conn, HOME_FEATURED)?,
            latest_posts(conn, HOME_POSTS)?,
            list_testimonials(conn, Some(HOME_TESTIMONIALS))?,
        ))
    })?;

    let search = SearchConfig::home(&app.routes);
    let state = SearchFilterState::new(ctx.max_price);
    let vm = HomeVm {
        search: &search,
        state: &state,
        ctx: &ctx,
        featured: &featured,
        posts: &posts,
        testimonials: &testimonials,
    };
    html_response(home_page(&app.chrome(req), &vm))
}

pub fn listings(req: &Request, app: &App) -> ResultResp {
    let params = FormData::from_query(req);
    let results = load_results(app, &params)?;
    let search = SearchConfig::listings(&app.routes);

    let vm = ListingsVm {
        search: &search,
        state: &results.state,
        ctx: &results.ctx,
        page: &results.page,
        params: &params,
        current_query: req.uri().query().unwrap_or(""),
    };
    html_response(listings_page(&app.chrome(req), &vm))
}

pub fn listing(req: &Request, app: &App, id: i64) -> ResultResp {
    let listing = app
        .db
        .with_conn(|conn| get_listing(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(listing_page(&app.chrome(req), &listing))
}

pub fn complexes(req: &Request, app: &App) -> ResultResp {
    let complexes = app.db.with_conn(|conn| list_complexes(conn))?;
    html_response(complexes_page(&app.chrome(req), &complexes))
}

pub fn complex(req: &Request, app: &App, id: i64) -> ResultResp {
    let (complex, listings) = app.db.with_conn(|conn| {
        let complex = get_complex(conn, id)?.ok_or(ServerError::NotFound)?;
        Ok((complex, listings_for_complex(conn, id)?))
    })?;
    html_response(complex_page(&app.chrome(req), &complex, &listings))
}

pub fn posts(req: &Request, app: &App) -> ResultResp {
    let params = FormData::from_query(req);
    let page = app
        .db
        .with_conn(|conn| published_posts(conn, params.get_i64("page"), app.settings.per_page))?;
    html_response(posts_page(&app.chrome(req), &page, &params))
}

/// Drafts are invisible to the public site.
pub fn post(req: &Request, app: &App, id: i64) -> ResultResp {
    let post = app
        .db
        .with_conn(|conn| get_post(conn, id))?
        .filter(|p| p.published)
        .ok_or(ServerError::NotFound)?;
    html_response(post_page(&app.chrome(req), &post))
}

pub fn about(req: &Request, app: &App) -> ResultResp {
    let testimonials = app.db.with_conn(|conn| list_testimonials(conn, None))?;
    html_response(about_page(&app.chrome(req), &testimonials))
}

/// Flips the theme cookie and returns to where the toggle was clicked.
pub fn toggle_theme(req: &Request, app: &App) -> ResultResp {
    let params = FormData::from_query(req);
    let return_to = params
        .get("return_to")
        .filter(|p| is_local_path(p))
        .unwrap_or(app.routes.home.as_str());

    see_other_with_cookie(return_to, &theme_cookie(!is_dark(req)))
}
