use crate::domain::{ComplexInput, ComplexSummary, ListingComplex};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

/// Complexes with their listing counts, alphabetical.
pub fn list_complexes(conn: &Connection) -> Result<Vec<ComplexSummary>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select c.id, c.title, c.city, c.cover_url,
                   (select count(*) from listings l where l.complex_id = c.id)
            from listing_complexes c
            order by c.title collate nocase
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare complexes failed: {e}")))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ComplexSummary {
                id: row.get(0)?,
                title: row.get(1)?,
                city: row.get(2)?,
                cover_url: row.get(3)?,
                listing_count: row.get(4)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("query complexes failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read complex failed: {e}")))
}

pub fn get_complex(conn: &Connection, id: i64) -> Result<Option<ListingComplex>, ServerError> {
    conn.query_row(
        r#"
        select id, title, description, address, city, cover_url, created_at
        from listing_complexes where id = ?
        "#,
        params![id],
        |row| {
            Ok(ListingComplex {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                address: row.get(3)?,
                city: row.get(4)?,
                cover_url: row.get(5)?,
                created_at: row.get(6)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select complex failed: {e}")))
}

pub fn insert_complex(
    conn: &Connection,
    input: &ComplexInput,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into listing_complexes (title, description, address, city, cover_url, created_at)
        values (?, ?, ?, ?, ?, ?)
        "#,
        params![input.title, input.description, input.address, input.city, input.cover_url, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert complex failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn update_complex(conn: &Connection, id: i64, input: &ComplexInput) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            r#"
            update listing_complexes
            set title = ?, description = ?, address = ?, city = ?, cover_url = ?
            where id = ?
            "#,
            params![input.title, input.description, input.address, input.city, input.cover_url, id],
        )
        .map_err(|e| ServerError::DbError(format!("update complex failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

/// Listings of a deleted complex stay, detached.
pub fn delete_complex(conn: &Connection, id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute("delete from listing_complexes where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete complex failed: {e}")))?;
    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_listings_and_detaches_on_delete() {
        let conn = crate::db::test_conn();
        let input = ComplexInput {
            title: "Residencial Jardins".to_string(),
            description: String::new(),
            address: String::new(),
            city: "Campinas".to_string(),
            cover_url: None,
        };
        let id = insert_complex(&conn, &input, NaiveDateTime::default()).unwrap();
        conn.execute(
            "insert into listings (title, kind, complex_id, created_at) values ('Apto 12', 2, ?, '2024-01-01 00:00:00')",
            params![id],
        )
        .unwrap();

        let all = list_complexes(&conn).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].listing_count, 1);

        delete_complex(&conn, id).unwrap();
        let orphan: Option<i64> = conn
            .query_row("select complex_id from listings", [], |r| r.get(0))
            .unwrap();
        assert_eq!(orphan, None);
    }
}
