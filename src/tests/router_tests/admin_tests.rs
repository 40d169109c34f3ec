use crate::db::listings::get_listing;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post_form, seed_listing, test_app};

#[test]
fn dashboard_lists_every_resource() {
    let app = test_app();
    seed_listing(&app, "Casa", 1, 1, 10_000);

    let resp = handle(get("/admin"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for label in ["Listings", "Complexes", "Blog posts", "Testimonials"] {
        assert!(body.contains(label), "missing {label}");
    }
}

#[test]
fn listing_create_then_edit() {
    let app = test_app();

    let resp = handle(
        post_form(
            "/admin/listings",
            "title=Casa+Azul&kind=1&objective=2&price=3.500&city=Florian%C3%B3polis&stat%5BQuartos%5D=2&featured=on",
        ),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 303);
    let location = header(&resp, "Location").unwrap().to_string();
    assert_eq!(location, "/admin/listings/1/edit");

    let body = body_string(handle(get(&location), &app).expect("Handler failed"));
    assert!(body.contains("Casa Azul"));

    let resp = handle(
        post_form("/admin/listings/1", "title=Casa+Verde&kind=1&objective=2&price=4000&status=4"),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 303);

    let listing = app
        .db
        .with_conn(|conn| get_listing(conn, 1))
        .unwrap()
        .expect("listing exists");
    assert_eq!(listing.title, "Casa Verde");
    assert_eq!(listing.price_cents, 400_000);
    assert!(!listing.featured);
}

#[test]
fn invalid_listing_input_is_bad_request() {
    let app = test_app();

    for body in [
        "kind=1&objective=1&price=10",
        "title=X&kind=77&objective=1&price=10",
        "title=X&kind=1&objective=1&price=dez",
    ] {
        match handle(post_form("/admin/listings", body), &app) {
            Err(err @ ServerError::BadRequest(_)) => assert_eq!(err.status(), 400),
            other => panic!("{body}: expected BadRequest, got {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn photos_attach_and_detach() {
    let app = test_app();
    let id = seed_listing(&app, "Casa", 1, 1, 10_000);

    let resp = handle(
        post_form(&format!("/admin/listings/{id}/photos"), "url=https%3A%2F%2Fcdn.example%2Fa.jpg"),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(header(&resp, "Location"), Some(format!("/admin/listings/{id}/edit").as_str()));

    let listing = app.db.with_conn(|conn| get_listing(conn, id)).unwrap().unwrap();
    assert_eq!(listing.photos.len(), 1);
    let photo_id = listing.photos[0].id;

    handle(
        post_form(&format!("/admin/listings/{id}/photos/{photo_id}/delete"), ""),
        &app,
    )
    .expect("Handler failed");
    let listing = app.db.with_conn(|conn| get_listing(conn, id)).unwrap().unwrap();
    assert!(listing.photos.is_empty());

    assert!(matches!(
        handle(post_form(&format!("/admin/listings/{id}/photos"), "url=javascript%3Aalert(1)"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn deleting_missing_rows_is_not_found() {
    let app = test_app();

    for path in [
        "/admin/listings/42/delete",
        "/admin/complexes/42/delete",
        "/admin/posts/42/delete",
        "/admin/testimonials/42/delete",
    ] {
        assert!(
            matches!(handle(post_form(path, ""), &app), Err(ServerError::NotFound)),
            "{path}"
        );
    }
}

#[test]
fn export_follows_current_filters() {
    let app = test_app();
    seed_listing(&app, "Venda", 1, 1, 10_000);
    seed_listing(&app, "Aluguel", 1, 2, 20_000);

    let resp = handle(get("/admin/listings/export?q[objective_eq]=2"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
    );
    assert!(header(&resp, "Content-Disposition")
        .unwrap()
        .contains("listings.xlsx"));
}

#[test]
fn complex_delete_keeps_its_listings() {
    let app = test_app();

    let resp = handle(
        post_form("/admin/complexes", "title=Residencial+Mar&city=Floripa"),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(header(&resp, "Location"), Some("/admin/complexes"));

    handle(
        post_form(
            "/admin/listings",
            "title=Apto+101&kind=2&objective=1&price=500000&complex_id=1",
        ),
        &app,
    )
    .expect("Handler failed");

    let body = body_string(handle(get("/complexes/1"), &app).expect("Handler failed"));
    assert!(body.contains("Residencial Mar"));
    assert!(body.contains("Apto 101"));

    handle(post_form("/admin/complexes/1/delete", ""), &app).expect("Handler failed");
    let listing = app.db.with_conn(|conn| get_listing(conn, 1)).unwrap().unwrap();
    assert_eq!(listing.complex_id, None);
}

#[test]
fn published_posts_and_testimonials_reach_the_public_site() {
    let app = test_app();

    handle(
        post_form("/admin/posts", "title=Mercado+em+alta&body=Primeiro.%0D%0A%0D%0ASegundo.&published=on"),
        &app,
    )
    .expect("Handler failed");
    handle(
        post_form("/admin/testimonials", "author=Ana&content=Atendimento+excelente"),
        &app,
    )
    .expect("Handler failed");

    let body = body_string(handle(get("/posts/1"), &app).expect("Handler failed"));
    assert!(body.contains("Mercado em alta"));

    let body = body_string(handle(get("/about"), &app).expect("Handler failed"));
    assert!(body.contains("Atendimento excelente"));

    assert!(matches!(
        handle(post_form("/admin/testimonials", "author=Ana"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn unknown_admin_resource_is_not_found() {
    let app = test_app();
    assert!(matches!(handle(get("/admin/users"), &app), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/admin/listings/7/edit"), &app), Err(ServerError::NotFound)));
}
