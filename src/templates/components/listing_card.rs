use crate::config::SiteSettings;
use crate::domain::listing::format_price;
use crate::domain::{ListingStatus, ListingSummary};
use crate::routes::Routes;
use crate::templates::components::stat_list;
use maud::{html, Markup};

pub fn listing_card(listing: &ListingSummary, routes: &Routes, settings: &SiteSettings) -> Markup {
    html! {
        article class="listing-card" {
            a href=(routes.listing(listing.id)) {
                @if let Some(url) = &listing.cover_url {
                    img src=(url) alt=(listing.title) loading="lazy";
                } @else {
                    div class="listing-card-placeholder" {}
                }
            }
            div class="listing-card-body" {
                @if listing.status != ListingStatus::Recent {
                    span class="badge" { (listing.status.label()) }
                }
                h3 { a href=(routes.listing(listing.id)) { (listing.title) } }
                p class="muted" {
                    (settings.kind_label(listing.kind)) " · " (settings.objective_label(listing.objective))
                    @if !listing.city.is_empty() { " · " (listing.city) }
                }
                p class="price" { (format_price(listing.price_cents)) }
                (stat_list(&listing.stats))
            }
        }
    }
}

pub fn listing_grid(listings: &[ListingSummary], routes: &Routes, settings: &SiteSettings) -> Markup {
    html! {
        @if listings.is_empty() {
            p class="empty" { "No listings match these filters." }
        } @else {
            div class="listing-grid" {
                @for listing in listings {
                    (listing_card(listing, routes, settings))
                }
            }
        }
    }
}
