use crate::templates::Chrome;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, chrome: &Chrome, content: Markup) -> Markup {
    let routes = chrome.routes;
    let settings = chrome.settings;

    html! {
        (DOCTYPE)
        html lang="pt-BR" class=[chrome.dark.then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (settings.agency_name) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="icon" type="image/svg+xml" href="/static/favicon/favicon.svg";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href=(routes.home) class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#524ed2"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                          class="icon icon-tabler icon-tabler-home"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { (settings.agency_name) }
                  }
                  nav {
                      ul {
                          li { a href=(routes.listings) { "Listings" } }
                          li { a href=(routes.complexes) { "Complexes" } }
                          li { a href=(routes.posts) { "Blog" } }
                          li { a href=(routes.about) { "About us" } }
                      }
                  }

                  a href=(routes.theme_toggle(&chrome.current_url)) class="theme-toggle" {
                      @if chrome.dark { "Light mode" } @else { "Dark mode" }
                  }
              }
                (content)
              footer class="site-footer" {
                  p { strong { (settings.agency_name) } " · " (settings.address) }
                  p { (settings.phone) " · " a href=(format!("mailto:{}", settings.email)) { (settings.email) } }
              }
            }
        }
    }
}
