// src/handlers/admin.rs
//! Backoffice CRUD. Every mutation is a POST answered with 303; invalid
//! input surfaces as 400 through `ServerError::BadRequest`.

use crate::app::App;
use crate::db::complexes::{delete_complex, get_complex, insert_complex, list_complexes, update_complex};
use crate::db::listings::{
    count_listings, delete_listing, get_listing, insert_listing, matching_listings, update_listing,
};
use crate::db::photos::{add_photo, delete_photo};
use crate::db::posts::{all_posts, delete_post, get_post, insert_post, update_post};
use crate::db::testimonials::{
    delete_testimonial, get_testimonial, insert_testimonial, list_testimonials, update_testimonial,
};
use crate::domain::{ComplexInput, ListingInput, PostInput, TestimonialInput};
use crate::errors::ServerError;
use crate::forms::FormData;
use crate::handlers::search::load_results;
use crate::responses::{html_response, see_other, xlsx_response, ResultResp};
use crate::routes::AdminResource;
use crate::search::{decode, SearchConfig};
use crate::spreadsheets::listings_workbook;
use crate::templates::pages::admin::{
    admin_complex_form, admin_complexes_page, admin_dashboard_page, admin_listing_form,
    admin_listings_page, admin_post_form, admin_posts_page, admin_testimonial_form,
    admin_testimonials_page, AdminListingsVm, DashboardVm,
};
use astra::Request;
use chrono::{NaiveDateTime, Utc};
use tracing::info;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

pub fn dashboard(req: &Request, app: &App) -> ResultResp {
    let vm = app.db.with_conn(|conn| {
        Ok(DashboardVm {
            listings: count_listings(conn)?,
            complexes: list_complexes(conn)?.len(),
            posts: all_posts(conn)?.len(),
            testimonials: list_testimonials(conn, None)?.len(),
        })
    })?;
    html_response(admin_dashboard_page(&app.chrome(req), &vm))
}

// ---- Listings ----

pub fn listings_index(req: &Request, app: &App) -> ResultResp {
    let params = FormData::from_query(req);
    let results = load_results(app, &params)?;
    let search = SearchConfig::admin(&app.routes);

    let vm = AdminListingsVm {
        search: &search,
        state: &results.state,
        ctx: &results.ctx,
        page: &results.page,
        params: &params,
        current_query: req.uri().query().unwrap_or(""),
    };
    html_response(admin_listings_page(&app.chrome(req), &vm))
}

/// Every listing matching the current filters, as a spreadsheet.
pub fn listings_export(req: &Request, app: &App) -> ResultResp {
    let params = FormData::from_query(req);
    let listings = app.db.with_conn(|conn| {
        let ctx = app.search_context(conn)?;
        let state = decode(&params, &ctx);
        matching_listings(conn, &state, &ctx)
    })?;

    let buffer = listings_workbook(&listings, &app.settings)?;
    info!(rows = listings.len(), "listings exported");
    xlsx_response(buffer, "listings.xlsx")
}

pub fn listing_new(req: &Request, app: &App) -> ResultResp {
    let complexes = app.db.with_conn(|conn| list_complexes(conn))?;
    html_response(admin_listing_form(&app.chrome(req), None, &complexes))
}

pub fn listing_create(req: &mut Request, app: &App) -> ResultResp {
    let form = FormData::from_body(req)?;
    let input = ListingInput::from_form(&form, &app.settings)?;
    let id = app.db.with_conn(|conn| insert_listing(conn, &input, now()))?;

    info!(id, title = %input.title, "listing created");
    see_other(&app.routes.admin_edit(AdminResource::Listings, id))
}

pub fn listing_edit(req: &Request, app: &App, id: i64) -> ResultResp {
    let (listing, complexes) = app.db.with_conn(|conn| {
        let listing = get_listing(conn, id)?.ok_or(ServerError::NotFound)?;
        Ok((listing, list_complexes(conn)?))
    })?;
    html_response(admin_listing_form(&app.chrome(req), Some(&listing), &complexes))
}

pub fn listing_update(req: &mut Request, app: &App, id: i64) -> ResultResp {
    let form = FormData::from_body(req)?;
    let input = ListingInput::from_form(&form, &app.settings)?;
    app.db.with_conn(|conn| update_listing(conn, id, &input))?;

    info!(id, "listing updated");
    see_other(&app.routes.admin_edit(AdminResource::Listings, id))
}

pub fn listing_delete(app: &App, id: i64) -> ResultResp {
    app.db.with_conn(|conn| delete_listing(conn, id))?;
    info!(id, "listing deleted");
    see_other(&app.routes.admin_index(AdminResource::Listings))
}

pub fn photo_add(req: &mut Request, app: &App, listing_id: i64) -> ResultResp {
    let form = FormData::from_body(req)?;
    let url = form.require("url")?;
    app.db.with_conn(|conn| add_photo(conn, listing_id, url))?;
    see_other(&app.routes.admin_edit(AdminResource::Listings, listing_id))
}

pub fn photo_delete(app: &App, listing_id: i64, photo_id: i64) -> ResultResp {
    app.db
        .with_conn(|conn| delete_photo(conn, listing_id, photo_id))?;
    see_other(&app.routes.admin_edit(AdminResource::Listings, listing_id))
}

// ---- Complexes ----

pub fn complexes_index(req: &Request, app: &App) -> ResultResp {
    let complexes = app.db.with_conn(|conn| list_complexes(conn))?;
    html_response(admin_complexes_page(&app.chrome(req), &complexes))
}

pub fn complex_new(req: &Request, app: &App) -> ResultResp {
    html_response(admin_complex_form(&app.chrome(req), None))
}

pub fn complex_create(req: &mut Request, app: &App) -> ResultResp {
    let input = ComplexInput::from_form(&FormData::from_body(req)?)?;
    let id = app.db.with_conn(|conn| insert_complex(conn, &input, now()))?;
    info!(id, title = %input.title, "complex created");
    see_other(&app.routes.admin_index(AdminResource::Complexes))
}

pub fn complex_edit(req: &Request, app: &App, id: i64) -> ResultResp {
    let complex = app
        .db
        .with_conn(|conn| get_complex(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(admin_complex_form(&app.chrome(req), Some(&complex)))
}

pub fn complex_update(req: &mut Request, app: &App, id: i64) -> ResultResp {
    let input = ComplexInput::from_form(&FormData::from_body(req)?)?;
    app.db.with_conn(|conn| update_complex(conn, id, &input))?;
    see_other(&app.routes.admin_index(AdminResource::Complexes))
}

/// Listings in the complex survive; they just lose the link.
pub fn complex_delete(app: &App, id: i64) -> ResultResp {
    app.db.with_conn(|conn| delete_complex(conn, id))?;
    info!(id, "complex deleted");
    see_other(&app.routes.admin_index(AdminResource::Complexes))
}

// ---- Posts ----

pub fn posts_index(req: &Request, app: &App) -> ResultResp {
    let posts = app.db.with_conn(|conn| all_posts(conn))?;
    html_response(admin_posts_page(&app.chrome(req), &posts))
}

pub fn post_new(req: &Request, app: &App) -> ResultResp {
    html_response(admin_post_form(&app.chrome(req), None))
}

pub fn post_create(req: &mut Request, app: &App) -> ResultResp {
    let input = PostInput::from_form(&FormData::from_body(req)?)?;
    let id = app.db.with_conn(|conn| insert_post(conn, &input, now()))?;
    info!(id, published = input.published, "post created");
    see_other(&app.routes.admin_index(AdminResource::Posts))
}

pub fn post_edit(req: &Request, app: &App, id: i64) -> ResultResp {
    let post = app
        .db
        .with_conn(|conn| get_post(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(admin_post_form(&app.chrome(req), Some(&post)))
}

pub fn post_update(req: &mut Request, app: &App, id: i64) -> ResultResp {
    let input = PostInput::from_form(&FormData::from_body(req)?)?;
    app.db.with_conn(|conn| update_post(conn, id, &input))?;
    see_other(&app.routes.admin_index(AdminResource::Posts))
}

pub fn post_delete(app: &App, id: i64) -> ResultResp {
    app.db.with_conn(|conn| delete_post(conn, id))?;
    info!(id, "post deleted");
    see_other(&app.routes.admin_index(AdminResource::Posts))
}

// ---- Testimonials ----

pub fn testimonials_index(req: &Request, app: &App) -> ResultResp {
    let testimonials = app.db.with_conn(|conn| list_testimonials(conn, None))?;
    html_response(admin_testimonials_page(&app.chrome(req), &testimonials))
}

pub fn testimonial_new(req: &Request, app: &App) -> ResultResp {
    html_response(admin_testimonial_form(&app.chrome(req), None))
}

pub fn testimonial_create(req: &mut Request, app: &App) -> ResultResp {
    let input = TestimonialInput::from_form(&FormData::from_body(req)?)?;
    let id = app
        .db
        .with_conn(|conn| insert_testimonial(conn, &input, now()))?;
    info!(id, "testimonial created");
    see_other(&app.routes.admin_index(AdminResource::Testimonials))
}

pub fn testimonial_edit(req: &Request, app: &App, id: i64) -> ResultResp {
    let testimonial = app
        .db
        .with_conn(|conn| get_testimonial(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(admin_testimonial_form(&app.chrome(req), Some(&testimonial)))
}

pub fn testimonial_update(req: &mut Request, app: &App, id: i64) -> ResultResp {
    let input = TestimonialInput::from_form(&FormData::from_body(req)?)?;
    app.db
        .with_conn(|conn| update_testimonial(conn, id, &input))?;
    see_other(&app.routes.admin_index(AdminResource::Testimonials))
}

pub fn testimonial_delete(app: &App, id: i64) -> ResultResp {
    app.db.with_conn(|conn| delete_testimonial(conn, id))?;
    see_other(&app.routes.admin_index(AdminResource::Testimonials))
}
