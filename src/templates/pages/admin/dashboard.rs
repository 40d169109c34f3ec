use crate::routes::AdminResource;
use crate::templates::{admin_layout, Chrome};
use maud::{html, Markup};

pub struct DashboardVm {
    pub listings: i64,
    pub complexes: usize,
    pub posts: usize,
    pub testimonials: usize,
}

pub fn admin_dashboard_page(chrome: &Chrome, vm: &DashboardVm) -> Markup {
    let counts = [
        (AdminResource::Listings, vm.listings),
        (AdminResource::Complexes, vm.complexes as i64),
        (AdminResource::Posts, vm.posts as i64),
        (AdminResource::Testimonials, vm.testimonials as i64),
    ];

    admin_layout(
        "Admin Dashboard",
        chrome,
        html! {
            div class="dashboard-grid" {
                @for (resource, count) in counts {
                    section class="card" {
                        h3 { (resource.label()) }
                        p class="count" { (count) }
                        a href=(chrome.routes.admin_index(resource)) { "Manage" }
                        " · "
                        a href=(chrome.routes.admin_new(resource)) { "New" }
                    }
                }
            }
        },
    )
}
