// src/domain/page.rs

/// One page of a paginated result. `number` is 1-based.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> usize {
        if self.total == 0 || self.per_page == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.page_count()
    }
}

/// Clamp a requested page number into `1..=page_count`.
pub fn clamp_page(requested: Option<i64>, total: usize, per_page: usize) -> usize {
    let page_count = if total == 0 || per_page == 0 {
        1
    } else {
        total.div_ceil(per_page)
    };
    let requested = requested.filter(|p| *p > 0).unwrap_or(1) as usize;
    requested.min(page_count)
}

pub fn offset(number: usize, per_page: usize) -> usize {
    number.saturating_sub(1) * per_page
}
