use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{admin, assets, public, search};
use crate::responses::{html_error_response, ResultResp};
use crate::routes::{segments_under, AdminResource};
use crate::search::SearchConfig;
use astra::{Request, Response};
use std::time::Instant;
use tracing::{info, warn};

const STATIC_BASE: &str = "/static";

/// Entry point for every worker: dispatch, render errors, log the outcome.
pub fn serve(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(%method, %path, error = %err, "request failed");
            html_error_response(&err)
        }
    };

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let routes = &app.routes;

    if path == routes.home {
        return match method.as_str() {
            "GET" => public::home(&req, app),
            _ => Err(ServerError::NotFound),
        };
    }
    if let Some(segments) = segments_under(&path, STATIC_BASE) {
        return match method.as_str() {
            "GET" => assets::static_file(app, &segments),
            _ => Err(ServerError::NotFound),
        };
    }
    if let Some(segments) = segments_under(&path, &routes.listings) {
        return listings_routes(&method, &segments, &req, app);
    }
    if let Some(segments) = segments_under(&path, &routes.complexes) {
        return match (method.as_str(), segments.as_slice()) {
            ("GET", []) => public::complexes(&req, app),
            ("GET", [id]) => public::complex(&req, app, parse_id(id)?),
            _ => Err(ServerError::NotFound),
        };
    }
    if let Some(segments) = segments_under(&path, &routes.posts) {
        return match (method.as_str(), segments.as_slice()) {
            ("GET", []) => public::posts(&req, app),
            ("GET", [id]) => public::post(&req, app, parse_id(id)?),
            _ => Err(ServerError::NotFound),
        };
    }
    if let Some(segments) = segments_under(&path, &routes.admin) {
        return admin_routes(&method, &segments, &mut req, app);
    }

    match method.as_str() {
        "GET" if path == routes.about => public::about(&req, app),
        "GET" if path == routes.theme => public::toggle_theme(&req, app),
        _ => Err(ServerError::NotFound),
    }
}

/// Non-numeric ids can't name a row, so they are a plain 404.
fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

fn listings_routes(method: &str, segments: &[&str], req: &Request, app: &App) -> ResultResp {
    let config = SearchConfig::listings(&app.routes);
    match (method, segments) {
        ("GET", []) => public::listings(req, app),
        ("GET", ["search"]) => search::submit(req, app, &config),
        ("GET", ["search", "reset"]) => search::reset(req, app, &config),
        ("GET", ["search", "objective"]) => search::objective(req, app, &config),
        ("GET", [id]) => public::listing(req, app, parse_id(id)?),
        _ => Err(ServerError::NotFound),
    }
}

fn admin_routes(method: &str, segments: &[&str], req: &mut Request, app: &App) -> ResultResp {
    let (resource, rest) = match segments {
        [] if method == "GET" => return admin::dashboard(req, app),
        [resource, rest @ ..] => (
            AdminResource::from_segment(resource).ok_or(ServerError::NotFound)?,
            rest,
        ),
        _ => return Err(ServerError::NotFound),
    };

    match resource {
        AdminResource::Listings => admin_listings(method, rest, req, app),
        AdminResource::Complexes => match (method, rest) {
            ("GET", []) => admin::complexes_index(req, app),
            ("GET", ["new"]) => admin::complex_new(req, app),
            ("POST", []) => admin::complex_create(req, app),
            ("GET", [id, "edit"]) => admin::complex_edit(req, app, parse_id(id)?),
            ("POST", [id]) => admin::complex_update(req, app, parse_id(id)?),
            ("POST", [id, "delete"]) => admin::complex_delete(app, parse_id(id)?),
            _ => Err(ServerError::NotFound),
        },
        AdminResource::Posts => match (method, rest) {
            ("GET", []) => admin::posts_index(req, app),
            ("GET", ["new"]) => admin::post_new(req, app),
            ("POST", []) => admin::post_create(req, app),
            ("GET", [id, "edit"]) => admin::post_edit(req, app, parse_id(id)?),
            ("POST", [id]) => admin::post_update(req, app, parse_id(id)?),
            ("POST", [id, "delete"]) => admin::post_delete(app, parse_id(id)?),
            _ => Err(ServerError::NotFound),
        },
        AdminResource::Testimonials => match (method, rest) {
            ("GET", []) => admin::testimonials_index(req, app),
            ("GET", ["new"]) => admin::testimonial_new(req, app),
            ("POST", []) => admin::testimonial_create(req, app),
            ("GET", [id, "edit"]) => admin::testimonial_edit(req, app, parse_id(id)?),
            ("POST", [id]) => admin::testimonial_update(req, app, parse_id(id)?),
            ("POST", [id, "delete"]) => admin::testimonial_delete(app, parse_id(id)?),
            _ => Err(ServerError::NotFound),
        },
    }
}

fn admin_listings(method: &str, rest: &[&str], req: &mut Request, app: &App) -> ResultResp {
    let config = SearchConfig::admin(&app.routes);
    match (method, rest) {
        ("GET", []) => admin::listings_index(req, app),
        ("GET", ["search"]) => search::submit(req, app, &config),
        ("GET", ["search", "reset"]) => search::reset(req, app, &config),
        ("GET", ["search", "objective"]) => search::objective(req, app, &config),
        ("GET", ["export"]) => admin::listings_export(req, app),
        ("GET", ["new"]) => admin::listing_new(req, app),
        ("POST", []) => admin::listing_create(req, app),
        ("GET", [id, "edit"]) => admin::listing_edit(req, app, parse_id(id)?),
        ("POST", [id]) => admin::listing_update(req, app, parse_id(id)?),
        ("POST", [id, "delete"]) => admin::listing_delete(app, parse_id(id)?),
        ("POST", [id, "photos"]) => admin::photo_add(req, app, parse_id(id)?),
        ("POST", [id, "photos", photo_id, "delete"]) => {
            admin::photo_delete(app, parse_id(id)?, parse_id(photo_id)?)
        }
        _ => Err(ServerError::NotFound),
    }
}
