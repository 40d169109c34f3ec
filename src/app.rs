// src/app.rs
use crate::config::SiteSettings;
use crate::db::listings::max_price_cents;
use crate::db::Database;
use crate::errors::ServerError;
use crate::routes::Routes;
use crate::search::SearchContext;
use crate::templates::Chrome;
use astra::Request;
use rusqlite::Connection;

const THEME_COOKIE: &str = "theme";

/// Everything a request handler needs, shared by all workers.
#[derive(Debug, Clone)]
pub struct App {
    pub db: Database,
    pub settings: SiteSettings,
    pub routes: Routes,
    pub static_dir: String,
}

impl App {
    pub fn new(db: Database, settings: SiteSettings, routes: Routes) -> Self {
        Self {
            db,
            settings,
            routes,
            static_dir: "static".to_string(),
        }
    }

    pub fn with_static_dir(mut self, dir: impl Into<String>) -> Self {
        self.static_dir = dir.into();
        self
    }

    pub fn chrome(&self, req: &Request) -> Chrome<'_> {
        Chrome {
            settings: &self.settings,
            routes: &self.routes,
            dark: is_dark(req),
            current_url: req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| self.routes.home.clone()),
        }
    }

    /// Stats keys and price ceiling for this request. The ceiling follows the
    /// most expensive listing, or the configured fallback on an empty table.
    pub fn search_context(&self, conn: &Connection) -> Result<SearchContext, ServerError> {
        let max_cents = max_price_cents(conn)?
            .filter(|c| *c > 0)
            .unwrap_or(self.settings.fallback_max_price_cents);
        Ok(SearchContext::from_max_price_cents(
            self.settings.stats_keys.clone(),
            max_cents,
        ))
    }
}

pub fn cookie_value<'r>(req: &'r Request, name: &str) -> Option<&'r str> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

pub fn is_dark(req: &Request) -> bool {
    cookie_value(req, THEME_COOKIE) == Some("dark")
}

pub fn theme_cookie(dark: bool) -> String {
    let value = if dark { "dark" } else { "light" };
    format!("{THEME_COOKIE}={value}; Path=/; Max-Age=31536000; SameSite=Lax")
}

pub fn is_htmx(req: &Request) -> bool {
    req.headers().contains_key("HX-Request")
}

/// Only same-site absolute paths that fit in a `Location` header;
/// rejects `//host`, backslashes and control characters.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
}
