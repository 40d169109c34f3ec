use crate::errors::ServerError;
use crate::forms::FormData;
use chrono::NaiveDateTime;

/// A development grouping several listings.
#[derive(Debug, Clone)]
pub struct ListingComplex {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub cover_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct ComplexSummary {
    pub id: i64,
    pub title: String,
    pub city: String,
    pub cover_url: Option<String>,
    pub listing_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexInput {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub cover_url: Option<String>,
}

impl ComplexInput {
    pub fn from_form(form: &FormData) -> Result<Self, ServerError> {
        Ok(Self {
            title: form.require("title")?.to_string(),
            description: form.get_trimmed("description").unwrap_or("").to_string(),
            address: form.get_trimmed("address").unwrap_or("").to_string(),
            city: form.get_trimmed("city").unwrap_or("").to_string(),
            cover_url: form.get_trimmed("cover_url").map(str::to_string),
        })
    }
}
