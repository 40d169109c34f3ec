use crate::domain::Testimonial;
use crate::routes::AdminResource;
use crate::templates::pages::admin::{delete_button, form_target};
use crate::templates::{admin_layout, Chrome};
use maud::{html, Markup};

const RESOURCE: AdminResource = AdminResource::Testimonials;

pub fn admin_testimonials_page(chrome: &Chrome, testimonials: &[Testimonial]) -> Markup {
    let routes = chrome.routes;

    admin_layout(
        "Testimonials",
        chrome,
        html! {
            div class="toolbar" {
                a href=(routes.admin_new(RESOURCE)) class="button primary" { "New testimonial" }
            }
            table class="admin-table" {
                thead { tr { th { "ID" } th { "Author" } th { "Content" } th { "Actions" } } }
                tbody {
                    @for t in testimonials {
                        tr {
                            td { (t.id) }
                            td { (t.author) }
                            td { (t.content) }
                            td {
                                a href=(routes.admin_edit(RESOURCE, t.id)) { "Edit" }
                                " "
                                (delete_button(&routes.admin_delete(RESOURCE, t.id), "testimonial"))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn admin_testimonial_form(chrome: &Chrome, testimonial: Option<&Testimonial>) -> Markup {
    let routes = chrome.routes;
    let (action, submit_label) = form_target(
        &routes.admin_index(RESOURCE),
        testimonial.map(|t| routes.admin_item(RESOURCE, t.id)),
    );

    admin_layout(
        if testimonial.is_some() { "Edit testimonial" } else { "New testimonial" },
        chrome,
        html! {
            form action=(action) method="post" class="admin-form" {
                label { "Author" input type="text" name="author" required value=(testimonial.map(|t| t.author.as_str()).unwrap_or("")); }
                label { "Content"
                    textarea name="content" rows="5" required { (testimonial.map(|t| t.content.as_str()).unwrap_or("")) }
                }
                button type="submit" class="primary" { (submit_label) }
            }
        },
    )
}
