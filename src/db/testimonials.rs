use crate::domain::{Testimonial, TestimonialInput};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Testimonial> {
    Ok(Testimonial {
        id: row.get(0)?,
        author: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Newest first; `limit` of `None` returns all.
pub fn list_testimonials(
    conn: &Connection,
    limit: Option<usize>,
) -> Result<Vec<Testimonial>, ServerError> {
    let limit = limit.map(|n| n as i64).unwrap_or(-1);
    let mut stmt = conn
        .prepare("select id, author, content, created_at from testimonials order by id desc limit ?")
        .map_err(|e| ServerError::DbError(format!("prepare testimonials failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit], from_row)
        .map_err(|e| ServerError::DbError(format!("query testimonials failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read testimonial failed: {e}")))
}

pub fn get_testimonial(conn: &Connection, id: i64) -> Result<Option<Testimonial>, ServerError> {
    conn.query_row(
        "select id, author, content, created_at from testimonials where id = ?",
        params![id],
        from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select testimonial failed: {e}")))
}

pub fn insert_testimonial(
    conn: &Connection,
    input: &TestimonialInput,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into testimonials (author, content, created_at) values (?, ?, ?)",
        params![input.author, input.content, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert testimonial failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn update_testimonial(
    conn: &Connection,
    id: i64,
    input: &TestimonialInput,
) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "update testimonials set author = ?, content = ? where id = ?",
            params![input.author, input.content, id],
        )
        .map_err(|e| ServerError::DbError(format!("update testimonial failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_testimonial(conn: &Connection, id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute("delete from testimonials where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete testimonial failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}
