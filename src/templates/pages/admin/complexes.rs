use crate::domain::{ComplexSummary, ListingComplex};
use crate::routes::AdminResource;
use crate::templates::pages::admin::{delete_button, form_target};
use crate::templates::{admin_layout, Chrome};
use maud::{html, Markup};

const RESOURCE: AdminResource = AdminResource::Complexes;

pub fn admin_complexes_page(chrome: &Chrome, complexes: &[ComplexSummary]) -> Markup {
    let routes = chrome.routes;

    admin_layout(
        "Complexes",
        chrome,
        html! {
            div class="toolbar" {
                a href=(routes.admin_new(RESOURCE)) class="button primary" { "New complex" }
            }
            table class="admin-table" {
                thead { tr { th { "ID" } th { "Title" } th { "City" } th { "Units" } th { "Actions" } } }
                tbody {
                    @for c in complexes {
                        tr {
                            td { (c.id) }
                            td { a href=(routes.complex(c.id)) { (c.title) } }
                            td { (c.city) }
                            td { (c.listing_count) }
                            td {
                                a href=(routes.admin_edit(RESOURCE, c.id)) { "Edit" }
                                " "
                                (delete_button(&routes.admin_delete(RESOURCE, c.id), "complex"))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn admin_complex_form(chrome: &Chrome, complex: Option<&ListingComplex>) -> Markup {
    let routes = chrome.routes;
    let (action, submit_label) = form_target(
        &routes.admin_index(RESOURCE),
        complex.map(|c| routes.admin_item(RESOURCE, c.id)),
    );

    admin_layout(
        if complex.is_some() { "Edit complex" } else { "New complex" },
        chrome,
        html! {
            form action=(action) method="post" class="admin-form" {
                label { "Title" input type="text" name="title" required value=(complex.map(|c| c.title.as_str()).unwrap_or("")); }
                label { "Description"
                    textarea name="description" rows="6" { (complex.map(|c| c.description.as_str()).unwrap_or("")) }
                }
                label { "Address" input type="text" name="address" value=(complex.map(|c| c.address.as_str()).unwrap_or("")); }
                label { "City" input type="text" name="city" value=(complex.map(|c| c.city.as_str()).unwrap_or("")); }
                label { "Cover image URL"
                    input type="url" name="cover_url" value=(complex.and_then(|c| c.cover_url.as_deref()).unwrap_or(""));
                }
                button type="submit" class="primary" { (submit_label) }
            }
        },
    )
}
