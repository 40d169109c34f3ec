use crate::config::SiteSettings;
use crate::domain::listing::stat_field_name;
use crate::domain::ListingStatus;
use crate::search::{SearchConfig, SearchContext, SearchFilterState};
use maud::{html, Markup};

/// The one search form, shaped by `config`. `current_query` is the query
/// string the page was rendered from; the objective endpoint compares against it.
pub fn listing_search(
    config: &SearchConfig,
    state: &SearchFilterState,
    ctx: &SearchContext,
    settings: &SiteSettings,
    current_query: &str,
) -> Markup {
    let fields = config.fields;
    let field_id = |name: &str| format!("{}-{name}", config.id);

    html! {
        form
            id=(config.id)
            class=(if config.compact { "search search-compact" } else { "search" })
            method="get"
            action=(config.submit_path)
        {
            input type="hidden" name="current_query" value=(current_query);

            @if fields.objective {
                fieldset class="objective-tabs" {
                    legend class="sr-only" { "Objective" }
                    @for choice in &settings.objectives {
                        label class="tab" {
                            input
                                type="radio"
                                name="objective"
                                value=(choice.code)
                                checked[state.objective == choice.code]
                                hx-get=(config.objective_path)
                                hx-trigger="change"
                                hx-include="closest form"
                                hx-swap="none";
                            " " (choice.label)
                        }
                    }
                }
            } @else {
                input type="hidden" name="objective" value=(state.objective);
            }

            @if fields.title {
                label for=(field_id("title")) class="sr-only" { "Search" }
                input
                    type="search"
                    id=(field_id("title"))
                    name="title"
                    value=(state.title)
                    placeholder="Neighborhood, street or development";
            }

            @if fields.status {
                label for=(field_id("status")) { "Status" }
                select id=(field_id("status")) name="status" {
                    option value="" selected[state.status.is_none()] { "Any status" }
                    @for status in ListingStatus::ALL {
                        option value=(status.code()) selected[state.status == Some(status)] { (status.label()) }
                    }
                }
            }

            @if fields.kind {
                label for=(field_id("kind")) { "Type" }
                select id=(field_id("kind")) name="kind" {
                    option value="0" selected[state.kind == 0] { "Any type" }
                    @for choice in &settings.kinds {
                        option value=(choice.code) selected[state.kind == choice.code] { (choice.label) }
                    }
                }
            }

            @if fields.price {
                fieldset class="price-range" {
                    legend { "Price" }
                    label for=(field_id("price-min")) { "From" }
                    input
                        type="number"
                        id=(field_id("price-min"))
                        name="price_min"
                        min="0"
                        max=(ctx.max_price)
                        value=(state.price_range.0);
                    label for=(field_id("price-max")) { "To" }
                    input
                        type="number"
                        id=(field_id("price-max"))
                        name="price_max"
                        min="0"
                        max=(ctx.max_price)
                        value=(state.price_range.1);
                }
            }

            @if fields.stats && !ctx.stats_keys.is_empty() {
                fieldset class="stat-filters" {
                    legend { "Features" }
                    @for key in &ctx.stats_keys {
                        label { (key)
                            input type="text" inputmode="numeric" size="3" name=(stat_field_name(key)) value=(state.stat(key));
                        }
                    }
                }
            }

            div class="actions" {
                button type="submit" class="primary" { "Search" }
                @if !config.compact {
                    a href=(config.reset_path) class="reset" { "Clear filters" }
                }
            }
        }
    }
}
