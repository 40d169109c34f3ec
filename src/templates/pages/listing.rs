use crate::domain::listing::format_price;
use crate::domain::Listing;
use crate::templates::components::{photo_gallery, stat_list};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn listing_page(chrome: &Chrome, listing: &Listing) -> Markup {
    let settings = chrome.settings;

    desktop_layout(
        &listing.title,
        chrome,
        html! {
            main class="container listing-detail" {
                (photo_gallery(&listing.title, &listing.photos))

                header {
                    span class="badge" { (listing.status.label()) }
                    h1 { (listing.title) }
                    p class="muted" {
                        (settings.kind_label(listing.kind)) " · " (settings.objective_label(listing.objective))
                    }
                    p class="price" { (format_price(listing.price_cents)) }
                }

                @if !listing.address.is_empty() || !listing.city.is_empty() {
                    p class="address" { (listing.address) @if !listing.city.is_empty() { " – " (listing.city) } }
                }

                @if let (Some(id), Some(title)) = (listing.complex_id, &listing.complex_title) {
                    p { "Part of " a href=(chrome.routes.complex(id)) { (title) } }
                }

                @if !listing.stats.is_empty() {
                    (stat_list(&listing.stats))
                }

                @for paragraph in listing.description.split("\n\n").filter(|p| !p.trim().is_empty()) {
                    p { (paragraph.trim()) }
                }

                section class="card contact" {
                    h3 { "Interested?" }
                    p { "Call " strong { (settings.phone) } " or write to "
                        a href=(format!("mailto:{}?subject={}", settings.email, listing.title)) { (settings.email) } }
                }
            }
        },
    )
}
