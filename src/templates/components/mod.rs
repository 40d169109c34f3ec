use maud::{html, Markup};

pub mod error;
pub mod listing_card;
pub mod listing_search;
pub mod pagination;
pub mod photo_gallery;

pub use error::error_page;
pub use listing_card::{listing_card, listing_grid};
pub use listing_search::listing_search;
pub use pagination::pagination;
pub use photo_gallery::photo_gallery;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn testimonial_quote(author: &str, content: &str) -> Markup {
    html! {
        blockquote class="testimonial" {
            p { "“" (content) "”" }
            footer { "— " (author) }
        }
    }
}

/// Small "label: value" list, used for listing stats.
pub fn stat_list<'a>(stats: impl IntoIterator<Item = (&'a String, &'a String)>) -> Markup {
    html! {
        ul class="stats" {
            @for (key, value) in stats {
                li { span class="stat-key" { (key) } " " strong { (value) } }
            }
        }
    }
}
