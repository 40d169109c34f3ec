use crate::errors::ServerError;
use crate::forms::FormData;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialInput {
    pub author: String,
    pub content: String,
}

impl TestimonialInput {
    pub fn from_form(form: &FormData) -> Result<Self, ServerError> {
        Ok(Self {
            author: form.require("author")?.to_string(),
            content: form.require("content")?.to_string(),
        })
    }
}
