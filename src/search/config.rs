use crate::routes::Routes;

/// Which filters a search form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub title: bool,
    pub status: bool,
    pub kind: bool,
    pub objective: bool,
    pub price: bool,
    pub stats: bool,
}

impl SearchFields {
    pub const ALL: SearchFields = SearchFields {
        title: true,
        status: true,
        kind: true,
        objective: true,
        price: true,
        stats: true,
    };
}

/// One search form variant: what it shows and where it navigates.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// DOM id of the rendered form.
    pub id: &'static str,
    pub results_path: String,
    pub submit_path: String,
    pub reset_path: String,
    pub objective_path: String,
    pub fields: SearchFields,
    pub compact: bool,
}

impl SearchConfig {
    pub fn new(id: &'static str, results_path: impl Into<String>) -> Self {
        let results_path = results_path.into();
        Self {
            id,
            submit_path: Routes::search_submit(&results_path),
            reset_path: Routes::search_reset(&results_path),
            objective_path: Routes::search_objective(&results_path),
            results_path,
            fields: SearchFields::ALL,
            compact: false,
        }
    }

    pub fn with_fields(mut self, fields: SearchFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Hero search on the home page.
    pub fn home(routes: &Routes) -> Self {
        Self::new("home-search", routes.listings.as_str())
            .with_fields(SearchFields {
                title: true,
                status: false,
                kind: true,
                objective: true,
                price: false,
                stats: false,
            })
            .compact()
    }

    /// Sidebar on the public results page.
    pub fn listings(routes: &Routes) -> Self {
        Self::new("listing-search", routes.listings.as_str()).with_fields(SearchFields {
            status: false,
            ..SearchFields::ALL
        })
    }

    /// Filter bar on the backoffice listing table.
    pub fn admin(routes: &Routes) -> Self {
        Self::new(
            "admin-listing-search",
            routes.admin_index(crate::routes::AdminResource::Listings),
        )
        .with_fields(SearchFields {
            stats: false,
            ..SearchFields::ALL
        })
    }
}

/// Server-supplied values the codec needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    pub stats_keys: Vec<String>,
    /// Price ceiling in major units.
    pub max_price: i64,
}

impl SearchContext {
    pub fn new(stats_keys: Vec<String>, max_price: i64) -> Self {
        Self {
            stats_keys,
            max_price,
        }
    }

    /// Ceiling from the most expensive listing, rounded up to whole units.
    pub fn from_max_price_cents(stats_keys: Vec<String>, max_price_cents: i64) -> Self {
        let cents = max_price_cents.max(0);
        Self::new(stats_keys, cents / 100 + i64::from(cents % 100 != 0))
    }

    pub fn knows_stat(&self, key: &str) -> bool {
        self.stats_keys.iter().any(|k| k == key)
    }
}
