use crate::app::App;
use crate::config::SiteSettings;
use crate::db::listings::insert_listing;
use crate::db::{init_db, Database};
use crate::domain::{ListingInput, ListingStatus};
use crate::routes::Routes;
use astra::{Body, Response};
use chrono::Utc;
use http::{Method, Request};
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// App over a fresh database file; the file is deleted when this is dropped.
pub struct TestApp {
    app: App,
    db_path: PathBuf,
}

impl Deref for TestApp {
    type Target = App;

    fn deref(&self) -> &App {
        &self.app
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut path = self.db_path.clone().into_os_string();
            path.push(suffix);
            let _ = fs::remove_file(path);
        }
    }
}

/// Unique database path in the temp dir with the production schema applied.
pub fn init_test_db() -> (Database, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "realty_test_{nanos}_{}.sqlite",
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (db, path)
}

pub fn test_app() -> TestApp {
    let (db, db_path) = init_test_db();
    TestApp {
        app: App::new(db, SiteSettings::default(), Routes::default()),
        db_path,
    }
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header<'r>(resp: &'r Response, name: &str) -> Option<&'r str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn seed_listing(app: &App, title: &str, kind: i64, objective: i64, price_cents: i64) -> i64 {
    let mut stats = BTreeMap::new();
    stats.insert("Quartos".to_string(), "3".to_string());
    let input = ListingInput {
        title: title.to_string(),
        description: String::new(),
        status: ListingStatus::Recent,
        kind,
        objective,
        price_cents,
        address: String::new(),
        city: "Florianópolis".to_string(),
        complex_id: None,
        stats,
        featured: false,
    };
    app.db
        .with_conn(|conn| insert_listing(conn, &input, Utc::now().naive_utc()))
        .unwrap()
}

#[test]
fn test_app_removes_its_database_file() {
    let app = test_app();
    let path = app.db_path.clone();
    assert!(path.exists());

    drop(app);
    assert!(!path.exists());
}
