use crate::domain::{ListingSummary, Page};
use crate::forms::FormData;
use crate::search::{SearchConfig, SearchContext, SearchFilterState};
use crate::templates::components::{listing_grid, listing_search, pagination};
use crate::templates::{desktop_layout, Chrome};
use maud::{html, Markup};

pub struct ListingsVm<'a> {
    pub search: &'a SearchConfig,
    pub state: &'a SearchFilterState,
    pub ctx: &'a SearchContext,
    pub page: &'a Page<ListingSummary>,
    pub params: &'a FormData,
    pub current_query: &'a str,
}

pub fn listings_page(chrome: &Chrome, vm: &ListingsVm) -> Markup {
    desktop_layout(
        "Listings",
        chrome,
        html! {
            main class="container with-sidebar" {
                aside {
                    (listing_search(vm.search, vm.state, vm.ctx, chrome.settings, vm.current_query))
                }
                section {
                    h1 { (chrome.settings.objective_label(vm.state.objective)) " listings" }
                    p class="muted" { (vm.page.total) " found" }
                    (listing_grid(&vm.page.items, chrome.routes, chrome.settings))
                    (pagination(vm.page, &vm.search.results_path, vm.params))
                }
            }
        },
    )
}
