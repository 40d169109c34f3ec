use crate::domain::listing::{format_price, stat_field_name};
use crate::domain::{ComplexSummary, Listing, ListingStatus, ListingSummary, Page};
use crate::forms::FormData;
use crate::routes::AdminResource;
use crate::search::{SearchConfig, SearchContext, SearchFilterState};
use crate::templates::components::{listing_search, pagination};
use crate::templates::pages::admin::{delete_button, form_target};
use crate::templates::{admin_layout, Chrome};
use maud::{html, Markup};

pub struct AdminListingsVm<'a> {
    pub search: &'a SearchConfig,
    pub state: &'a SearchFilterState,
    pub ctx: &'a SearchContext,
    pub page: &'a Page<ListingSummary>,
    pub params: &'a FormData,
    pub current_query: &'a str,
}

pub fn admin_listings_page(chrome: &Chrome, vm: &AdminListingsVm) -> Markup {
    let routes = chrome.routes;
    let settings = chrome.settings;
    let export_href = if vm.current_query.is_empty() {
        routes.admin_listings_export()
    } else {
        format!("{}?{}", routes.admin_listings_export(), vm.current_query)
    };

    admin_layout(
        "Listings",
        chrome,
        html! {
            div class="toolbar" {
                a href=(routes.admin_new(AdminResource::Listings)) class="button primary" { "New listing" }
                a href=(export_href) class="button" { "Export to Excel" }
            }

            (listing_search(vm.search, vm.state, vm.ctx, settings, vm.current_query))

            p class="muted" { (vm.page.total) " listings" }
            table class="admin-table" {
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "Type" }
                        th { "Objective" }
                        th { "Price" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    @for listing in &vm.page.items {
                        tr {
                            td { (listing.id) }
                            td {
                                a href=(routes.listing(listing.id)) { (listing.title) }
                                @if listing.featured { " ★" }
                            }
                            td { (settings.kind_label(listing.kind)) }
                            td { (settings.objective_label(listing.objective)) }
                            td { (format_price(listing.price_cents)) }
                            td { (listing.status.label()) }
                            td {
                                a href=(routes.admin_edit(AdminResource::Listings, listing.id)) { "Edit" }
                                " "
                                (delete_button(&routes.admin_delete(AdminResource::Listings, listing.id), "listing"))
                            }
                        }
                    }
                }
            }
            (pagination(vm.page, &vm.search.results_path, vm.params))
        },
    )
}

/// New (`listing = None`) or edit form; the edit form also manages photos.
pub fn admin_listing_form(
    chrome: &Chrome,
    listing: Option<&Listing>,
    complexes: &[ComplexSummary],
) -> Markup {
    let routes = chrome.routes;
    let settings = chrome.settings;
    let (action, submit_label) = form_target(
        &routes.admin_index(AdminResource::Listings),
        listing.map(|l| routes.admin_item(AdminResource::Listings, l.id)),
    );

    let title = listing.map(|l| l.title.as_str()).unwrap_or("");
    let status = listing.map(|l| l.status).unwrap_or(ListingStatus::Recent);
    let kind = listing.map(|l| l.kind);
    let objective = listing.map(|l| l.objective);
    let complex_id = listing.and_then(|l| l.complex_id);
    let stat = |key: &str| {
        listing
            .and_then(|l| l.stats.get(key))
            .map(String::as_str)
            .unwrap_or("")
    };

    admin_layout(
        if listing.is_some() { "Edit listing" } else { "New listing" },
        chrome,
        html! {
            form action=(action) method="post" class="admin-form" {
                label { "Title" input type="text" name="title" value=(title) required; }
                label { "Description"
                    textarea name="description" rows="8" { (listing.map(|l| l.description.as_str()).unwrap_or("")) }
                }
                label { "Status"
                    select name="status" {
                        @for s in ListingStatus::ALL {
                            option value=(s.code()) selected[s == status] { (s.label()) }
                        }
                    }
                }
                label { "Type"
                    select name="kind" required {
                        @for choice in &settings.kinds {
                            option value=(choice.code) selected[kind == Some(choice.code)] { (choice.label) }
                        }
                    }
                }
                label { "Objective"
                    select name="objective" required {
                        @for choice in &settings.objectives {
                            option value=(choice.code) selected[objective == Some(choice.code)] { (choice.label) }
                        }
                    }
                }
                label { "Price"
                    input type="text" name="price" inputmode="decimal" required
                        value=(listing.map(|l| format!("{},{:02}", l.price_cents / 100, l.price_cents % 100)).unwrap_or_default());
                }
                label { "Address" input type="text" name="address" value=(listing.map(|l| l.address.as_str()).unwrap_or("")); }
                label { "City" input type="text" name="city" value=(listing.map(|l| l.city.as_str()).unwrap_or("")); }
                label { "Complex"
                    select name="complex_id" {
                        option value="" selected[complex_id.is_none()] { "None" }
                        @for c in complexes {
                            option value=(c.id) selected[complex_id == Some(c.id)] { (c.title) }
                        }
                    }
                }
                fieldset {
                    legend { "Features" }
                    @for key in &settings.stats_keys {
                        label { (key) input type="text" name=(stat_field_name(key)) value=(stat(key)); }
                    }
                }
                label class="checkbox" {
                    input type="checkbox" name="featured" checked[listing.map(|l| l.featured).unwrap_or(false)];
                    " Featured on the home page"
                }
                button type="submit" class="primary" { (submit_label) }
            }

            @if let Some(listing) = listing {
                section class="card" {
                    h3 { "Photos" }
                    ul class="photo-admin" {
                        @for photo in &listing.photos {
                            li {
                                img src=(photo.url) alt="" width="160";
                                (delete_button(&routes.admin_photo_delete(listing.id, photo.id), "photo"))
                            }
                        }
                    }
                    form action=(routes.admin_listing_photos(listing.id)) method="post" class="inline" {
                        input type="url" name="url" placeholder="https://..." required;
                        button type="submit" { "Add photo" }
                    }
                }
            }
        },
    )
}
