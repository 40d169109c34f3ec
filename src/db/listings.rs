use crate::db::photos::photos_for_listing;
use crate::domain::listing::{stats_from_json, stats_to_json};
use crate::domain::page::{clamp_page, offset};
use crate::domain::{Listing, ListingInput, ListingStatus, ListingSummary, Page};
use crate::errors::ServerError;
use crate::search::{SearchContext, SearchFilterState};
use chrono::NaiveDateTime;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SUMMARY_COLUMNS: &str = r#"
    l.id, l.title, l.status, l.kind, l.objective, l.price_cents, l.city, l.featured, l.stats,
    (select p.url from photos p where p.listing_id = l.id order by p.position, p.id limit 1)
"#;

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<ListingSummary> {
    let status: i64 = row.get(2)?;
    let stats: String = row.get(8)?;
    Ok(ListingSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        status: ListingStatus::from_code(status).unwrap_or(ListingStatus::Recent),
        kind: row.get(3)?,
        objective: row.get(4)?,
        price_cents: row.get(5)?,
        city: row.get(6)?,
        featured: row.get(7)?,
        stats: stats_from_json(&stats),
        cover_url: row.get(9)?,
    })
}

/// `%`, `_` and `\` are literal inside a `_cont` search.
fn like_pattern(raw: &str) -> String {
    let escaped = raw
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Keys that can sit inside a quoted JSON path label unchanged.
pub fn is_plain_stat_key(key: &str) -> bool {
    !key.trim().is_empty() && !key.contains(['"', '\\']) && !key.chars().any(char::is_control)
}

/// SQL `where` clause (with leading space, or empty) and its bound values.
/// Mirrors the query-string predicates: `_cont` is LIKE, `_eq` is equality,
/// price bounds only apply when they narrow `[0, max]`.
fn filter_clause(state: &SearchFilterState, ctx: &SearchContext) -> (String, Vec<Value>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut args: Vec<Value> = Vec::new();

    let title = state.title.trim();
    if !title.is_empty() {
        conditions.push("l.title like ? escape '\\'");
        args.push(Value::Text(like_pattern(title)));
    }
    if let Some(status) = state.status {
        conditions.push("l.status = ?");
        args.push(Value::Integer(status.code()));
    }
    if state.kind != 0 {
        conditions.push("l.kind = ?");
        args.push(Value::Integer(state.kind));
    }
    conditions.push("l.objective = ?");
    args.push(Value::Integer(state.objective));

    let (min, max) = state.price_range;
    if min != 0 {
        conditions.push("l.price_cents >= ?");
        args.push(Value::Integer(min.saturating_mul(100)));
    }
    if max != ctx.max_price {
        conditions.push("l.price_cents <= ?");
        args.push(Value::Integer(max.saturating_mul(100)));
    }

    for (key, value) in &state.stat_filters {
        let name = key.strip_suffix("_eq").unwrap_or(key);
        let value = value.trim();
        if value.is_empty() || !ctx.knows_stat(name) || !is_plain_stat_key(name) {
            continue;
        }
        conditions.push("json_extract(l.stats, ?) = ?");
        args.push(Value::Text(format!("$.\"{name}\"")));
        args.push(Value::Text(value.to_string()));
    }

    (format!(" where {}", conditions.join(" and ")), args)
}

/// One page of listings matching the decoded search state.
pub fn search_listings(
    conn: &Connection,
    state: &SearchFilterState,
    ctx: &SearchContext,
    requested_page: Option<i64>,
    per_page: usize,
) -> Result<Page<ListingSummary>, ServerError> {
    let (clause, mut args) = filter_clause(state, ctx);

    let total: i64 = conn
        .query_row(
            &format!("select count(*) from listings l{clause}"),
            params_from_iter(args.iter()),
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("count listings failed: {e}")))?;
    let total = total.max(0) as usize;

    let number = clamp_page(requested_page, total, per_page);
    args.push(Value::Integer(per_page as i64));
    args.push(Value::Integer(offset(number, per_page) as i64));

    let sql = format!(
        "select {SUMMARY_COLUMNS} from listings l{clause} \
         order by l.featured desc, l.id desc limit ? offset ?"
    );
    let items = query_summaries(conn, &sql, &args)?;

    Ok(Page {
        items,
        number,
        per_page,
        total,
    })
}

/// Every match, unpaged (spreadsheet export).
pub fn matching_listings(
    conn: &Connection,
    state: &SearchFilterState,
    ctx: &SearchContext,
) -> Result<Vec<ListingSummary>, ServerError> {
    let (clause, args) = filter_clause(state, ctx);
    let sql = format!("select {SUMMARY_COLUMNS} from listings l{clause} order by l.id desc");
    query_summaries(conn, &sql, &args)
}

fn query_summaries(
    conn: &Connection,
    sql: &str,
    args: &[Value],
) -> Result<Vec<ListingSummary>, ServerError> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| ServerError::DbError(format!("prepare listings query failed: {e}")))?;

    let rows = stmt
        .query_map(params_from_iter(args.iter()), summary_from_row)
        .map_err(|e| ServerError::DbError(format!("listings query failed: {e}")))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| ServerError::DbError(format!("read listing row failed: {e}")))
}

/// Featured listings still on the market, newest first.
pub fn featured_listings(conn: &Connection, limit: usize) -> Result<Vec<ListingSummary>, ServerError> {
    let sql = format!(
        "select {SUMMARY_COLUMNS} from listings l \
         where l.featured = 1 and l.status in (0, 2) order by l.id desc limit ?"
    );
    query_summaries(conn, &sql, &[Value::Integer(limit as i64)])
}

pub fn listings_for_complex(
    conn: &Connection,
    complex_id: i64,
) -> Result<Vec<ListingSummary>, ServerError> {
    let sql = format!(
        "select {SUMMARY_COLUMNS} from listings l where l.complex_id = ? order by l.price_cents"
    );
    query_summaries(conn, &sql, &[Value::Integer(complex_id)])
}

pub fn get_listing(conn: &Connection, id: i64) -> Result<Option<Listing>, ServerError> {
    let listing = conn
        .query_row(
            r#"
            select l.id, l.title, l.description, l.status, l.kind, l.objective, l.price_cents,
                   l.address, l.city, l.complex_id, c.title, l.stats, l.featured, l.created_at
            from listings l
            left join listing_complexes c on c.id = l.complex_id
            where l.id = ?
            "#,
            params![id],
            |row| {
                let status: i64 = row.get(3)?;
                let stats: String = row.get(11)?;
                Ok(Listing {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    status: ListingStatus::from_code(status).unwrap_or(ListingStatus::Recent),
                    kind: row.get(4)?,
                    objective: row.get(5)?,
                    price_cents: row.get(6)?,
                    address: row.get(7)?,
                    city: row.get(8)?,
                    complex_id: row.get(9)?,
                    complex_title: row.get(10)?,
                    stats: stats_from_json(&stats),
                    featured: row.get(12)?,
                    created_at: row.get(13)?,
                    photos: Vec::new(),
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))?;

    match listing {
        Some(mut listing) => {
            listing.photos = photos_for_listing(conn, listing.id)?;
            Ok(Some(listing))
        }
        None => Ok(None),
    }
}

pub fn insert_listing(
    conn: &Connection,
    input: &ListingInput,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into listings (
            title, description, status, kind, objective, price_cents,
            address, city, complex_id, stats, featured, created_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        "#,
        params![
            input.title,
            input.description,
            input.status.code(),
            input.kind,
            input.objective,
            input.price_cents,
            input.address,
            input.city,
            input.complex_id,
            stats_to_json(&input.stats),
            input.featured,
            now,
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

pub fn update_listing(conn: &Connection, id: i64, input: &ListingInput) -> Result<(), ServerError> {
    let changed = conn
        .execute(
            r#"
            update listings set
                title = ?1, description = ?2, status = ?3, kind = ?4, objective = ?5,
                price_cents = ?6, address = ?7, city = ?8, complex_id = ?9, stats = ?10,
                featured = ?11
            where id = ?12
            "#,
            params![
                input.title,
                input.description,
                input.status.code(),
                input.kind,
                input.objective,
                input.price_cents,
                input.address,
                input.city,
                input.complex_id,
                stats_to_json(&input.stats),
                input.featured,
                id,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update listing failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_listing(conn: &Connection, id: i64) -> Result<(), ServerError> {
    let changed = conn
        .execute("delete from listings where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete listing failed: {e}")))?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

/// Most expensive listing, the ceiling of the price filter.
pub fn max_price_cents(conn: &Connection) -> Result<Option<i64>, ServerError> {
    conn.query_row("select max(price_cents) from listings", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("select max price failed: {e}")))
}

pub fn count_listings(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from listings", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count listings failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_conn;
    use crate::forms::FormData;
    use crate::search::decode;
    use std::collections::BTreeMap;

    fn input(title: &str, kind: i64, objective: i64, price_cents: i64, rooms: &str) -> ListingInput {
        let mut stats = BTreeMap::new();
        if !rooms.is_empty() {
            stats.insert("Quartos".to_string(), rooms.to_string());
        }
        ListingInput {
            title: title.to_string(),
            description: String::new(),
            status: ListingStatus::Recent,
            kind,
            objective,
            price_cents,
            address: String::new(),
            city: "São Paulo".to_string(),
            complex_id: None,
            stats,
            featured: false,
        }
    }

    fn seed(conn: &Connection) {
        let now = NaiveDateTime::default();
        for listing in [
            input("Casa com piscina", 1, 1, 90_000_000, "4"),
            input("Apartamento 100% reformado", 2, 1, 45_000_000, "2"),
            input("Apartamento mobiliado", 2, 2, 350_000, "2"),
            input("Terreno plano", 3, 1, 20_000_000, ""),
        ] {
            insert_listing(conn, &listing, now).unwrap();
        }
    }

    fn ctx() -> SearchContext {
        SearchContext::new(vec!["Quartos".to_string()], 900_000)
    }

    fn titles(page: &Page<ListingSummary>) -> Vec<&str> {
        page.items.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn default_state_filters_by_objective_only() {
        let conn = test_conn();
        seed(&conn);
        let page = search_listings(&conn, &SearchFilterState::new(900_000), &ctx(), None, 12).unwrap();
        assert_eq!(page.total, 3);
        assert!(!titles(&page).contains(&"Apartamento mobiliado"));
    }

    #[test]
    fn title_kind_price_and_stats_narrow_results() {
        let conn = test_conn();
        seed(&conn);

        let mut state = SearchFilterState::new(900_000);
        state.title = "apartamento".to_string();
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(titles(&page), vec!["Apartamento 100% reformado"]);

        let mut state = SearchFilterState::new(900_000);
        state.set_price_range(100_000, 500_000);
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(titles(&page), vec!["Terreno plano", "Apartamento 100% reformado"]);

        let mut state = SearchFilterState::new(900_000);
        state.stat_filters.insert("Quartos".to_string(), "4".to_string());
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(titles(&page), vec!["Casa com piscina"]);

        let mut state = SearchFilterState::new(900_000);
        state.kind = 3;
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(titles(&page), vec!["Terreno plano"]);
    }

    #[test]
    fn like_wildcards_are_literal() {
        let conn = test_conn();
        seed(&conn);
        let mut state = SearchFilterState::new(900_000);
        state.title = "100%".to_string();
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(page.total, 1);

        state.title = "_".to_string();
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn listing_priced_on_a_fractional_bound_is_kept() {
        let conn = test_conn();
        insert_listing(&conn, &input("Kitnet", 2, 1, 150_050, "1"), NaiveDateTime::default()).unwrap();

        let state = decode(&FormData::parse("q[price_cents_lteq]=150050"), &ctx());
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(titles(&page), vec!["Kitnet"]);

        let state = decode(&FormData::parse("q[price_cents_gteq]=150050"), &ctx());
        let page = search_listings(&conn, &state, &ctx(), None, 12).unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn pages_are_clamped() {
        let conn = test_conn();
        seed(&conn);
        let state = SearchFilterState::new(900_000);
        let page = search_listings(&conn, &state, &ctx(), Some(99), 2).unwrap();
        assert_eq!(page.number, 2);
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_next());
    }

    #[test]
    fn crud_round_trip() {
        let conn = test_conn();
        let id = insert_listing(&conn, &input("Sobrado", 1, 1, 100, "3"), NaiveDateTime::default()).unwrap();

        let mut changed = input("Sobrado reformado", 1, 2, 200, "3");
        changed.status = ListingStatus::Rented;
        update_listing(&conn, id, &changed).unwrap();

        let listing = get_listing(&conn, id).unwrap().unwrap();
        assert_eq!(listing.title, "Sobrado reformado");
        assert_eq!(listing.status, ListingStatus::Rented);
        assert_eq!(listing.stats.get("Quartos").map(String::as_str), Some("3"));
        assert_eq!(max_price_cents(&conn).unwrap(), Some(200));

        delete_listing(&conn, id).unwrap();
        assert!(get_listing(&conn, id).unwrap().is_none());
        assert!(matches!(delete_listing(&conn, id), Err(ServerError::NotFound)));
        assert_eq!(max_price_cents(&conn).unwrap(), None);
    }
}
