use crate::db::posts::insert_post;
use crate::domain::PostInput;
use crate::errors::ServerError;
use crate::router::{handle, serve};
use crate::tests::utils::{body_string, get, header, seed_listing, test_app};
use chrono::Utc;
use http::HeaderValue;

#[test]
fn home_page_renders_compact_search() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"id="home-search""#));
    assert!(body.contains(r#"action="/listings/search""#));
    assert!(body.contains(r#"hx-get="/listings/search/objective""#));
}

#[test]
fn listing_detail_and_missing_ids() {
    let app = test_app();
    let id = seed_listing(&app, "Sobrado no Campeche", 1, 1, 95_000_000);

    let resp = handle(get(&format!("/listings/{id}")), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sobrado no Campeche"));
    assert!(body.contains("R$ 950.000"));

    for path in ["/listings/999", "/listings/abc", "/complexes/5"] {
        match handle(get(path), &app) {
            Err(ServerError::NotFound) => {}
            other => panic!("{path}: expected NotFound, got {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn drafts_stay_off_the_public_blog() {
    let app = test_app();
    let draft = PostInput {
        title: "Rascunho".to_string(),
        excerpt: String::new(),
        body: "Ainda não".to_string(),
        published: false,
    };
    let id = app
        .db
        .with_conn(|conn| insert_post(conn, &draft, Utc::now().naive_utc()))
        .unwrap();

    assert!(matches!(
        handle(get(&format!("/posts/{id}")), &app),
        Err(ServerError::NotFound)
    ));
    let body = body_string(handle(get("/posts"), &app).expect("Handler failed"));
    assert!(!body.contains("Rascunho"));
}

#[test]
fn theme_toggle_flips_cookie_and_returns() {
    let app = test_app();

    let resp = handle(get("/theme?return_to=%2Flistings%3Fpage%3D2"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), Some("/listings?page=2"));
    assert!(header(&resp, "Set-Cookie").unwrap().starts_with("theme=dark;"));

    let mut req = get("/theme?return_to=%2F");
    req.headers_mut()
        .insert("Cookie", HeaderValue::from_static("theme=dark"));
    let resp = handle(req, &app).expect("Handler failed");
    assert!(header(&resp, "Set-Cookie").unwrap().starts_with("theme=light;"));
}

#[test]
fn theme_toggle_refuses_offsite_return() {
    let app = test_app();

    let resp = handle(get("/theme?return_to=%2F%2Fevil.example"), &app).expect("Handler failed");
    assert_eq!(header(&resp, "Location"), Some("/"));
}

#[test]
fn theme_toggle_ignores_return_path_with_line_breaks() {
    let app = test_app();

    let resp = serve(get("/theme?return_to=%2Flistings%0Ax"), &app);
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), Some("/"));
}

#[test]
fn static_files_carry_their_content_type() {
    let app = test_app();

    let resp = serve(get("/static/main.css"), &app);
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), Some("text/css; charset=utf-8"));
}

#[test]
fn unknown_routes_render_error_page() {
    let app = test_app();

    let resp = serve(get("/nowhere"), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Not Found"));

    let resp = serve(get("/static/../Cargo.toml"), &app);
    assert_eq!(resp.status(), 404);
}
