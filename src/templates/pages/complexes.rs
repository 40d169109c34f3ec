use crate::domain::{ComplexSummary, ListingComplex, ListingSummary};
use crate::templates::components::listing_grid;
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn complexes_page(chrome: &Chrome, complexes: &[ComplexSummary]) -> Markup {
    desktop_layout(
        "Complexes",
        chrome,
        html! {
            main class="container" {
                h1 { "Developments" }
                @if complexes.is_empty() {
                    p class="empty" { "No developments yet." }
                }
                div class="listing-grid" {
                    @for complex in complexes {
                        article class="listing-card" {
                            @if let Some(url) = &complex.cover_url {
                                img src=(url) alt=(complex.title) loading="lazy";
                            }
                            div class="listing-card-body" {
                                h3 { a href=(chrome.routes.complex(complex.id)) { (complex.title) } }
                                p class="muted" {
                                    (complex.city)
                                    " · " (complex.listing_count)
                                    @if complex.listing_count == 1 { " unit" } @else { " units" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn complex_page(chrome: &Chrome, complex: &ListingComplex, listings: &[ListingSummary]) -> Markup {
    desktop_layout(
        &complex.title,
        chrome,
        html! {
            main class="container" {
                @if let Some(url) = &complex.cover_url {
                    img class="cover" src=(url) alt=(complex.title);
                }
                h1 { (complex.title) }
                p class="address" { (complex.address) @if !complex.city.is_empty() { " – " (complex.city) } }
                @for paragraph in complex.description.split("\n\n").filter(|p| !p.trim().is_empty()) {
                    p { (paragraph.trim()) }
                }
                h2 { "Available units" }
                (listing_grid(listings, chrome.routes, chrome.settings))
            }
        },
    )
}
