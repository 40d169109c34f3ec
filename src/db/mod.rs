pub mod complexes;
pub mod connection;
pub mod listings;
pub mod photos;
pub mod posts;
pub mod testimonials;

pub use connection::{init_db, Database};

/// Schema used by in-memory unit tests.
#[cfg(test)]
pub(crate) fn test_conn() -> rusqlite::Connection {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    conn.execute_batch(include_str!("../../sql/schema.sql")).unwrap();
    conn
}
