use crate::router::handle;
use crate::tests::utils::{body_string, get, header, seed_listing, test_app};
use http::HeaderValue;

#[test]
fn submit_redirects_to_canonical_query() {
    let app = test_app();

    let resp = handle(get("/listings/search?title=+casa+&kind=2&objective=1&status="), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        header(&resp, "Location"),
        Some("/listings?q[title_cont]=casa&q[kind_eq]=2&q[objective_eq]=1")
    );
}

#[test]
fn submit_keeps_only_known_stats_and_moved_price_bounds() {
    let app = test_app();
    // Ceiling follows the priciest listing: 800.000,00.
    seed_listing(&app, "Cobertura", 2, 1, 80_000_000);

    let resp = handle(
        get("/listings/search?objective=1&price_min=100000&price_max=800000&stat%5BQuartos%5D=2&stat%5BPiscina%5D=1"),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(
        header(&resp, "Location"),
        Some("/listings?q[objective_eq]=1&q[price_cents_gteq]=10000000&q[Quartos_eq]=2")
    );
}

#[test]
fn reset_lands_on_bare_results_path() {
    let app = test_app();

    let resp = handle(
        get("/listings/search/reset?current_query=q%5Btitle_cont%5D%3Dloft%26q%5Bobjective_eq%5D%3D2"),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), Some("/listings"));
}

#[test]
fn objective_matching_url_is_a_no_op() {
    let app = test_app();

    let resp = handle(
        get("/listings/search/objective?objective=2&current_query=q%5Bobjective_eq%5D%3D2"),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 204);
    assert_eq!(header(&resp, "Location"), None);
}

#[test]
fn default_objective_on_first_load_does_not_submit() {
    let app = test_app();

    let resp = handle(get("/listings/search/objective?objective=1&current_query="), &app)
        .expect("Handler failed");

    assert_eq!(resp.status(), 204);
}

#[test]
fn objective_change_submits_the_whole_form() {
    let app = test_app();

    let resp = handle(
        get("/listings/search/objective?objective=2&title=loft&current_query=q%5Bobjective_eq%5D%3D1"),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        header(&resp, "Location"),
        Some("/listings?q[title_cont]=loft&q[objective_eq]=2")
    );
}

#[test]
fn htmx_objective_change_answers_with_hx_redirect() {
    let app = test_app();

    let mut req = get("/listings/search/objective?objective=2&current_query=");
    req.headers_mut()
        .insert("HX-Request", HeaderValue::from_static("true"));
    let resp = handle(req, &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "HX-Redirect"), Some("/listings?q[objective_eq]=2"));
}

#[test]
fn admin_form_navigates_within_admin() {
    let app = test_app();

    let resp = handle(get("/admin/listings/search?kind=1&status=3"), &app).expect("Handler failed");
    assert_eq!(
        header(&resp, "Location"),
        Some("/admin/listings?q[status_eq]=3&q[kind_eq]=1&q[objective_eq]=1")
    );

    let resp = handle(get("/admin/listings/search/reset"), &app).expect("Handler failed");
    assert_eq!(header(&resp, "Location"), Some("/admin/listings"));
}

#[test]
fn results_page_reflects_url_state() {
    let app = test_app();
    seed_listing(&app, "Casa de praia", 1, 1, 50_000_000);
    seed_listing(&app, "Apartamento centro", 2, 2, 300_000);

    let resp = handle(get("/listings?q[objective_eq]=2"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Apartamento centro"));
    assert!(!body.contains("Casa de praia"));
    // The form round-trips the URL it was rendered from.
    assert!(body.contains(r#"name="current_query" value="q[objective_eq]=2""#));
}

#[test]
fn stale_stat_keys_in_url_are_ignored() {
    let app = test_app();
    seed_listing(&app, "Casa com piscina", 1, 1, 50_000_000);

    let resp = handle(get("/listings?q[Piscina_eq]=1&q[Quartos_eq]=3"), &app).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Casa com piscina"));
}
