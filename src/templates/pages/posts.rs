use crate::domain::{Page, Post};
use crate::forms::FormData;
use crate::templates::components::pagination;
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub fn posts_page(chrome: &Chrome, page: &Page<Post>, params: &FormData) -> Markup {
    desktop_layout(
        "Blog",
        chrome,
        html! {
            main class="container narrow" {
                h1 { "Blog" }
                @if page.items.is_empty() {
                    p class="empty" { "Nothing published yet." }
                }
                @for post in &page.items {
                    article class="post-teaser" {
                        h2 { a href=(chrome.routes.post(post.id)) { (post.title) } }
                        p class="muted" { (post.created_at.format("%d/%m/%Y")) }
                        p { (post.teaser()) }
                    }
                }
                (pagination(page, &chrome.routes.posts, params))
            }
        },
    )
}

pub fn post_page(chrome: &Chrome, post: &Post) -> Markup {
    desktop_layout(
        &post.title,
        chrome,
        html! {
            main class="container narrow" {
                article {
                    h1 { (post.title) }
                    p class="muted" { (post.created_at.format("%d/%m/%Y")) }
                    @for paragraph in post.paragraphs() {
                        p { (paragraph) }
                    }
                }
                a href=(chrome.routes.posts) { "← All posts" }
            }
        },
    )
}
