// templates/pages/home.rs

use crate::domain::{ListingSummary, Post, Testimonial};
use crate::search::{SearchConfig, SearchContext, SearchFilterState};
use crate::templates::components::{listing_grid, listing_search, testimonial_quote};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub search: &'a SearchConfig,
    pub state: &'a SearchFilterState,
    pub ctx: &'a SearchContext,
    pub featured: &'a [ListingSummary],
    pub posts: &'a [Post],
    pub testimonials: &'a [Testimonial],
}

pub fn home_page(chrome: &Chrome, vm: &HomeVm) -> Markup {
    let routes = chrome.routes;

    desktop_layout(
        "Home",
        chrome,
        html! {
            section class="hero" {
                h1 { (chrome.settings.tagline) }
                (listing_search(vm.search, vm.state, vm.ctx, chrome.settings, ""))
            }

            main class="container" {
                section {
                    h2 { "Featured listings" }
                    (listing_grid(vm.featured, routes, chrome.settings))
                    a href=(routes.listings) { "See all listings →" }
                }

                @if !vm.posts.is_empty() {
                    section {
                        h2 { "From the blog" }
                        ul class="post-list" {
                            @for post in vm.posts {
                                li {
                                    a href=(routes.post(post.id)) { (post.title) }
                                    p class="muted" { (post.teaser()) }
                                }
                            }
                        }
                    }
                }

                @if !vm.testimonials.is_empty() {
                    section class="testimonials" {
                        h2 { "What our clients say" }
                        @for t in vm.testimonials {
                            (testimonial_quote(&t.author, &t.content))
                        }
                    }
                }
            }
        },
    )
}
