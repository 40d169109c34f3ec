use crate::domain::Testimonial;
use crate::templates::components::{card, testimonial_quote};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn about_page(chrome: &Chrome, testimonials: &[Testimonial]) -> Markup {
    let settings = chrome.settings;

    desktop_layout(
        "About us",
        chrome,
        html! {
            main class="container narrow" {
                h1 { (settings.agency_name) }
                p class="lead" { (settings.tagline) }

                (card("Visit us", html! {
                    p { (settings.address) }
                    p { (settings.phone) }
                    p { a href=(format!("mailto:{}", settings.email)) { (settings.email) } }
                }))

                @if !testimonials.is_empty() {
                    section class="testimonials" {
                        h2 { "Testimonials" }
                        @for t in testimonials {
                            (testimonial_quote(&t.author, &t.content))
                        }
                    }
                }
            }
        },
    )
}
