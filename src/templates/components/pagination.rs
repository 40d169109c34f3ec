use crate::domain::Page;
use crate::forms::FormData;
use crate::search::to_query_string;
use maud::{html, Markup};

/// Link to page `number` keeping every other query parameter as is.
pub fn page_href(base_path: &str, params: &FormData, number: usize) -> String {
    let mut pairs: Vec<(String, String)> = params
        .pairs()
        .iter()
        .filter(|(k, _)| k != "page")
        .cloned()
        .collect();
    if number > 1 {
        pairs.push(("page".to_string(), number.to_string()));
    }

    let query = to_query_string(&pairs);
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

pub fn pagination<T>(page: &Page<T>, base_path: &str, params: &FormData) -> Markup {
    html! {
        @if page.page_count() > 1 {
            nav class="pagination" aria-label="Pagination" {
                @if page.has_prev() {
                    a rel="prev" href=(page_href(base_path, params, page.number - 1)) { "← Previous" }
                }
                @for n in 1..=page.page_count() {
                    @if n == page.number {
                        span class="current" aria-current="page" { (n) }
                    } @else {
                        a href=(page_href(base_path, params, n)) { (n) }
                    }
                }
                @if page.has_next() {
                    a rel="next" href=(page_href(base_path, params, page.number + 1)) { "Next →" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_links_keep_filters() {
        let params = FormData::parse("q[kind_eq]=2&page=3");
        assert_eq!(page_href("/listings", &params, 1), "/listings?q[kind_eq]=2");
        assert_eq!(page_href("/listings", &params, 4), "/listings?q[kind_eq]=2&page=4");
        assert_eq!(page_href("/posts", &FormData::default(), 1), "/posts");
    }
}
