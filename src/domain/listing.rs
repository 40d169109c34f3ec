use crate::config::SiteSettings;
use crate::errors::ServerError;
use crate::forms::FormData;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::warn;

pub const CURRENCY: &str = "R$";

/// Listing lifecycle. The numeric codes are part of the public query-string
/// contract (`q[status_eq]=3`) and of the `listings.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    Recent,
    Agreed,
    Sold,
    Rented,
    Closed,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 5] = [
        ListingStatus::Recent,
        ListingStatus::Agreed,
        ListingStatus::Sold,
        ListingStatus::Rented,
        ListingStatus::Closed,
    ];

    pub fn code(self) -> i64 {
        match self {
            ListingStatus::Recent => 0,
            ListingStatus::Agreed => 2,
            ListingStatus::Sold => 3,
            ListingStatus::Rented => 4,
            ListingStatus::Closed => 5,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            ListingStatus::Recent => "recent",
            ListingStatus::Agreed => "agreed",
            ListingStatus::Sold => "sold",
            ListingStatus::Rented => "rented",
            ListingStatus::Closed => "closed",
        }
    }

    /// Accepts the numeric code or the lowercase name.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::ALL
                .into_iter()
                .find(|s| s.name().eq_ignore_ascii_case(raw)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Recent => "Available",
            ListingStatus::Agreed => "Under agreement",
            ListingStatus::Sold => "Sold",
            ListingStatus::Rented => "Rented",
            ListingStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: i64,
    pub listing_id: i64,
    pub url: String,
    pub position: i64,
}

/// A listing with everything the detail page shows.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: ListingStatus,
    pub kind: i64,
    pub objective: i64,
    pub price_cents: i64,
    pub address: String,
    pub city: String,
    pub complex_id: Option<i64>,
    pub complex_title: Option<String>,
    pub stats: BTreeMap<String, String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
    pub photos: Vec<Photo>,
}

/// Card-sized projection used by result lists.
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub id: i64,
    pub title: String,
    pub status: ListingStatus,
    pub kind: i64,
    pub objective: i64,
    pub price_cents: i64,
    pub city: String,
    pub featured: bool,
    pub stats: BTreeMap<String, String>,
    pub cover_url: Option<String>,
}

/// Validated admin form input for create/update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub status: ListingStatus,
    pub kind: i64,
    pub objective: i64,
    pub price_cents: i64,
    pub address: String,
    pub city: String,
    pub complex_id: Option<i64>,
    pub stats: BTreeMap<String, String>,
    pub featured: bool,
}

impl ListingInput {
    pub fn from_form(form: &FormData, settings: &SiteSettings) -> Result<Self, ServerError> {
        let title = form.require("title")?.to_string();

        let status = match form.get_trimmed("status") {
            Some(raw) => ListingStatus::parse(raw)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown status '{raw}'")))?,
            None => ListingStatus::Recent,
        };

        let kind = form
            .get_i64("kind")
            .filter(|k| settings.kinds.iter().any(|c| c.code == *k))
            .ok_or_else(|| ServerError::BadRequest("kind is invalid".into()))?;

        let objective = form
            .get_i64("objective")
            .filter(|o| settings.objectives.iter().any(|c| c.code == *o))
            .ok_or_else(|| ServerError::BadRequest("objective is invalid".into()))?;

        let price_raw = form.require("price")?;
        let price_cents = parse_money_cents(price_raw)
            .ok_or_else(|| ServerError::BadRequest(format!("price '{price_raw}' is not a valid amount")))?;

        let stats = settings
            .stats_keys
            .iter()
            .filter_map(|key| {
                form.get_trimmed(&stat_field_name(key))
                    .map(|v| (key.clone(), v.to_string()))
            })
            .collect();

        Ok(Self {
            title,
            description: form.get_trimmed("description").unwrap_or("").to_string(),
            status,
            kind,
            objective,
            price_cents,
            address: form.get_trimmed("address").unwrap_or("").to_string(),
            city: form.get_trimmed("city").unwrap_or("").to_string(),
            complex_id: form.get_i64("complex_id").filter(|id| *id > 0),
            stats,
            featured: form.is_checked("featured"),
        })
    }
}

/// Form field carrying a stat value, e.g. `stat[Quartos]`.
pub fn stat_field_name(key: &str) -> String {
    format!("stat[{key}]")
}

pub fn stats_to_json(stats: &BTreeMap<String, String>) -> String {
    serde_json::to_string(stats).unwrap_or_else(|_| "{}".to_string())
}

/// Malformed JSON degrades to no stats.
pub fn stats_from_json(raw: &str) -> BTreeMap<String, String> {
    match serde_json::from_str(raw) {
        Ok(stats) => stats,
        Err(e) => {
            warn!(error = %e, "ignoring malformed listing stats");
            BTreeMap::new()
        }
    }
}

/// "R$ 1.250.000" / "R$ 1.250,50"
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let major = (cents / 100).to_string();

    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, ch) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    match cents % 100 {
        0 => format!("{CURRENCY} {sign}{grouped}"),
        minor => format!("{CURRENCY} {sign}{grouped},{minor:02}"),
    }
}

/// Parses "1.250.000", "1250000,50", "R$ 980" into cents.
/// A trailing separator followed by one or two digits is the decimal mark.
pub fn parse_money_cents(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned
        .strip_prefix(CURRENCY)
        .or_else(|| cleaned.strip_prefix('$'))
        .unwrap_or(&cleaned);

    let (int_part, frac_part) = match cleaned.rfind(['.', ',']) {
        Some(pos) if (1..=2).contains(&(cleaned.len() - pos - 1)) => {
            (&cleaned[..pos], &cleaned[pos + 1..])
        }
        _ => (cleaned, ""),
    };

    let digits: String = int_part.chars().filter(|c| *c != '.' && *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let major: i64 = digits.parse().ok()?;
    let minor: i64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<i64>().ok()? * 10,
        _ => frac_part.parse().ok()?,
    };

    major.checked_mul(100)?.checked_add(minor)
}
