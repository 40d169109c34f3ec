use crate::errors::ServerError;
use crate::forms::FormData;
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub published: bool,
    pub created_at: NaiveDateTime,
}

impl Post {
    /// Body split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Excerpt, or the first paragraph when no excerpt was written.
    pub fn teaser(&self) -> &str {
        if self.excerpt.trim().is_empty() {
            self.paragraphs().next().unwrap_or("")
        } else {
            self.excerpt.trim()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub published: bool,
}

impl PostInput {
    pub fn from_form(form: &FormData) -> Result<Self, ServerError> {
        Ok(Self {
            title: form.require("title")?.to_string(),
            excerpt: form.get_trimmed("excerpt").unwrap_or("").to_string(),
            // Browsers submit textarea line breaks as CRLF.
            body: form.require("body")?.replace("\r\n", "\n"),
            published: form.is_checked("published"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(excerpt: &str, body: &str) -> Post {
        Post {
            id: 1,
            title: "t".into(),
            excerpt: excerpt.into(),
            body: body.into(),
            published: true,
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn paragraphs_skip_blank_blocks() {
        let p = post("", "first\n\n\n\nsecond\n\n  ");
        assert_eq!(p.paragraphs().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn teaser_falls_back_to_first_paragraph() {
        assert_eq!(post("", "first\n\nsecond").teaser(), "first");
        assert_eq!(post(" short ", "first").teaser(), "short");
    }

    #[test]
    fn post_input_normalizes_line_breaks() {
        let form = FormData::parse("title=Hi&body=a%0D%0A%0D%0Ab&published=on");
        let input = PostInput::from_form(&form).unwrap();
        assert_eq!(input.body, "a\n\nb");
        assert!(input.published);
    }
}
