use crate::routes::AdminResource;
use crate::templates::Chrome;
use maud::{html, Markup, DOCTYPE};

/// Backoffice shell: resource sidebar instead of the public navigation.
pub fn admin_layout(title: &str, chrome: &Chrome, content: Markup) -> Markup {
    let routes = chrome.routes;

    html! {
        (DOCTYPE)
        html lang="pt-BR" class=[chrome.dark.then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Admin" }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body class="admin" {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href=(routes.admin) { h3 { (chrome.settings.agency_name) " · Admin" } }
                    a href=(routes.home) { "View site" }
                }
                div class="admin-shell" {
                    aside {
                        ul {
                            li { a href=(routes.admin) { "Dashboard" } }
                            @for resource in AdminResource::ALL {
                                li { a href=(routes.admin_index(resource)) { (resource.label()) } }
                            }
                        }
                    }
                    main class="container" {
                        h1 { (title) }
                        (content)
                    }
                }
            }
        }
    }
}
