use crate::domain::page::{clamp_page, offset};
use crate::domain::{Page, Post, PostInput};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, title, excerpt, body, published, created_at";

fn from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        excerpt: row.get(2)?,
        body: row.get(3)?,
        published: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn collect(
    conn: &Connection,
    sql: &str,
    args: impl rusqlite::Params,
) -> Result<Vec<Post>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(format!("prepare posts failed: {e}")))?;
    let rows = stmt
        .query_map(args, from_row)
        .map_err(|e| ServerError::DbError(format!("query posts failed: {e}")))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read post failed: {e}")))
}

/// Published posts, newest first.
pub fn published_posts(
    conn: &Connection,
    requested_page: Option<i64>,
    per_page: usize,
) -> Result<Page<Post>, ServerError> {
    let total: i64 = conn
        .query_row("select count(*) from posts where published = 1", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count posts failed: {e}")))?;
    let total = total.max(0) as usize;
    let number = clamp_page(requested_page, total, per_page);

    let items = collect(
        conn,
        &format!("select {COLUMNS} from posts where published = 1 order by id desc limit ? offset ?"),
        params![per_page as i64, offset(number, per_page) as i64],
    )?;

    Ok(Page {
        items,
        number,
        per_page,
        total,
    })
}

pub fn latest_posts(conn: &Connection, limit: usize) -> Result<Vec<Post>, ServerError> {
    collect(
        conn,
        &format!("select {COLUMNS} from posts where published = 1 order by id desc limit ?"),
        params![limit as i64],
    )
}

/// Drafts included, for the backoffice.
pub fn all_posts(conn: &Connection) -> Result<Vec<Post>, ServerError> {
    collect(conn, &format!("select {COLUMNS} from posts order by id desc"), [])
}

pub fn get_post(conn: &Connection, id: i64) -> Result<Option<Post>, ServerError> {
    conn.query_row(
        &format!("select {COLUMNS} from posts where id = ?"),
        params![id],
        from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select post failed: {e}")))
}

pub fn insert_post(conn: &Connection, input: &PostInput, now: NaiveDateTime) -> Result<i64, ServerError> {
    conn.execute(
        "insert into posts (title, excerpt, body, published, created_at) values (?, ?, ?, ?, ?)",
        params![input.title, input.excerpt, input.body, input.published, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert post failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn update_post(conn: &Connection, id: i64, input: &PostInput) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update posts set title = ?, excerpt = ?, body = ?, published = ? where id = ?",
            params![input.title, input.excerpt, input.body, input.published, id],
        )
        .map_err(|e| ServerError::DbError(format!("update post failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_post(conn: &Connection, id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute("delete from posts where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete post failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}
