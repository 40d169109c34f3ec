// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::io::Read;
use url::form_urlencoded;

/// Decoded `application/x-www-form-urlencoded` pairs, in arrival order.
/// Used for both URL query strings and POSTed form bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn from_query(req: &Request) -> Self {
        Self::parse(req.uri().query().unwrap_or(""))
    }

    pub fn from_body(req: &mut Request) -> Result<Self, ServerError> {
        let mut raw = String::new();
        req.body_mut()
            .reader()
            .read_to_string(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
        Ok(Self::parse(&raw))
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, trimmed, `None` when blank.
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get_trimmed(key).and_then(|v| v.parse().ok())
    }

    pub fn is_checked(&self, key: &str) -> bool {
        matches!(self.get_trimmed(key), Some("on" | "1" | "true"))
    }

    pub fn require(&self, key: &str) -> Result<&str, ServerError> {
        self.get_trimmed(key)
            .ok_or_else(|| ServerError::BadRequest(format!("{key} is required")))
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_brackets_and_plus() {
        let form = FormData::parse("?q%5Btitle_cont%5D=casa+azul&page=2");
        assert_eq!(form.get("q[title_cont]"), Some("casa azul"));
        assert_eq!(form.get_i64("page"), Some(2));
    }

    #[test]
    fn first_value_wins_and_blank_is_none() {
        let form = FormData::parse("a=1&a=2&b=%20%20");
        assert_eq!(form.get("a"), Some("1"));
        assert_eq!(form.get_trimmed("b"), None);
        assert!(form.require("b").is_err());
    }

    #[test]
    fn checkbox_values() {
        let form = FormData::parse("featured=on&published=0");
        assert!(form.is_checked("featured"));
        assert!(!form.is_checked("published"));
        assert!(!form.is_checked("missing"));
    }
}
