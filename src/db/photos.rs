use crate::domain::Photo;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn photos_for_listing(conn: &Connection, listing_id: i64) -> Result<Vec<Photo>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, listing_id, url, position from photos where listing_id = ? order by position, id",
        )
        .map_err(|e| ServerError::DbError(format!("prepare photos failed: {e}")))?;

    let rows = stmt
        .query_map(params![listing_id], |row| {
            Ok(Photo {
                id: row.get(0)?,
                listing_id: row.get(1)?,
                url: row.get(2)?,
                position: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("query photos failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Appends a photo after the listing's current last one.
pub fn add_photo(conn: &Connection, listing_id: i64, url: &str) -> Result<i64, ServerError> {
    let url = url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
        return Err(ServerError::BadRequest(format!("'{url}' is not a photo URL")));
    }

    conn.execute(
        r#"
        insert into photos (listing_id, url, position)
        values (?1, ?2, (select coalesce(max(position), -1) + 1 from photos where listing_id = ?1))
        "#,
        params![listing_id, url],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ServerError::NotFound
        }
        e => ServerError::DbError(format!("insert photo failed: {e}")),
    })?;

    Ok(conn.last_insert_rowid())
}

pub fn delete_photo(conn: &Connection, listing_id: i64, photo_id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            "delete from photos where id = ? and listing_id = ?",
            params![photo_id, listing_id],
        )
        .map_err(|e| ServerError::DbError(format!("delete photo failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_conn;

    fn listing(conn: &Connection) -> i64 {
        conn.execute(
            "insert into listings (title, kind, created_at) values ('x', 1, '2024-01-01 00:00:00')",
            [],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    #[test]
    fn photos_append_in_order() {
        let conn = test_conn();
        let id = listing(&conn);
        add_photo(&conn, id, "https://img.example/a.jpg").unwrap();
        let second = add_photo(&conn, id, "https://img.example/b.jpg").unwrap();

        let photos = photos_for_listing(&conn, id).unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[1].position, 1);

        delete_photo(&conn, id, second).unwrap();
        assert_eq!(photos_for_listing(&conn, id).unwrap().len(), 1);
        assert!(matches!(delete_photo(&conn, id, second), Err(ServerError::NotFound)));
    }

    #[test]
    fn rejects_non_urls_and_unknown_listings() {
        let conn = test_conn();
        let id = listing(&conn);
        assert!(matches!(
            add_photo(&conn, id, "javascript:alert(1)"),
            Err(ServerError::BadRequest(_))
        ));
        assert!(matches!(
            add_photo(&conn, id + 100, "https://img.example/a.jpg"),
            Err(ServerError::NotFound)
        ));
    }

    #[test]
    fn photos_go_with_their_listing() {
        let conn = test_conn();
        let id = listing(&conn);
        add_photo(&conn, id, "/static/a.jpg").unwrap();
        conn.execute("delete from listings where id = ?", params![id]).unwrap();
        assert!(photos_for_listing(&conn, id).unwrap().is_empty());
    }
}
