use crate::domain::Post;
use crate::routes::AdminResource;
use crate::templates::pages::admin::{delete_button, form_target};
use crate::templates::{admin_layout, Chrome};
use maud::{html, Markup};

const RESOURCE: AdminResource = AdminResource::Posts;

pub fn admin_posts_page(chrome: &Chrome, posts: &[Post]) -> Markup {
    let routes = chrome.routes;

    admin_layout(
        "Blog posts",
        chrome,
        html! {
            div class="toolbar" {
                a href=(routes.admin_new(RESOURCE)) class="button primary" { "New post" }
            }
            table class="admin-table" {
                thead { tr { th { "ID" } th { "Title" } th { "Created" } th { "State" } th { "Actions" } } }
                tbody {
                    @for post in posts {
                        tr {
                            td { (post.id) }
                            td { (post.title) }
                            td { (post.created_at.format("%d/%m/%Y %H:%M")) }
                            td {
                                @if post.published {
                                    a href=(routes.post(post.id)) { "Published" }
                                } @else {
                                    span class="muted" { "Draft" }
                                }
                            }
                            td {
                                a href=(routes.admin_edit(RESOURCE, post.id)) { "Edit" }
                                " "
                                (delete_button(&routes.admin_delete(RESOURCE, post.id), "post"))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn admin_post_form(chrome: &Chrome, post: Option<&Post>) -> Markup {
    let routes = chrome.routes;
    let (action, submit_label) = form_target(
        &routes.admin_index(RESOURCE),
        post.map(|p| routes.admin_item(RESOURCE, p.id)),
    );

    admin_layout(
        if post.is_some() { "Edit post" } else { "New post" },
        chrome,
        html! {
            form action=(action) method="post" class="admin-form" {
                label { "Title" input type="text" name="title" required value=(post.map(|p| p.title.as_str()).unwrap_or("")); }
                label { "Excerpt" input type="text" name="excerpt" value=(post.map(|p| p.excerpt.as_str()).unwrap_or("")); }
                label { "Body"
                    small class="muted" { " Separate paragraphs with a blank line." }
                    textarea name="body" rows="16" required { (post.map(|p| p.body.as_str()).unwrap_or("")) }
                }
                label class="checkbox" {
                    input type="checkbox" name="published" checked[post.map(|p| p.published).unwrap_or(false)];
                    " Published"
                }
                button type="submit" class="primary" { (submit_label) }
            }
        },
    )
}
