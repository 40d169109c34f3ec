// src/routes.rs

/// Path table handed to handlers and templates.
/// Every link the site renders is built from here.
#[derive(Debug, Clone)]
pub struct Routes {
    pub home: String,
    pub listings: String,
    pub complexes: String,
    pub posts: String,
    pub about: String,
    pub theme: String,
    pub admin: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            home: "/".to_string(),
            listings: "/listings".to_string(),
            complexes: "/complexes".to_string(),
            posts: "/posts".to_string(),
            about: "/about".to_string(),
            theme: "/theme".to_string(),
            admin: "/admin".to_string(),
        }
    }
}

/// Backoffice resources, mounted under `Routes::admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminResource {
    Listings,
    Complexes,
    Posts,
    Testimonials,
}

impl AdminResource {
    pub const ALL: [AdminResource; 4] = [
        AdminResource::Listings,
        AdminResource::Complexes,
        AdminResource::Posts,
        AdminResource::Testimonials,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            AdminResource::Listings => "listings",
            AdminResource::Complexes => "complexes",
            AdminResource::Posts => "posts",
            AdminResource::Testimonials => "testimonials",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.segment() == segment)
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminResource::Listings => "Listings",
            AdminResource::Complexes => "Complexes",
            AdminResource::Posts => "Blog posts",
            AdminResource::Testimonials => "Testimonials",
        }
    }
}

impl Routes {
    pub fn listing(&self, id: i64) -> String {
        format!("{}/{id}", self.listings)
    }

    pub fn complex(&self, id: i64) -> String {
        format!("{}/{id}", self.complexes)
    }

    pub fn post(&self, id: i64) -> String {
        format!("{}/{id}", self.posts)
    }

    pub fn search_submit(base: &str) -> String {
        format!("{base}/search")
    }

    pub fn search_reset(base: &str) -> String {
        format!("{base}/search/reset")
    }

    pub fn search_objective(base: &str) -> String {
        format!("{base}/search/objective")
    }

    pub fn admin_index(&self, resource: AdminResource) -> String {
        format!("{}/{}", self.admin, resource.segment())
    }

    pub fn admin_new(&self, resource: AdminResource) -> String {
        format!("{}/new", self.admin_index(resource))
    }

    pub fn admin_edit(&self, resource: AdminResource, id: i64) -> String {
        format!("{}/{id}/edit", self.admin_index(resource))
    }

    /// POST target for updates.
    pub fn admin_item(&self, resource: AdminResource, id: i64) -> String {
        format!("{}/{id}", self.admin_index(resource))
    }

    pub fn admin_delete(&self, resource: AdminResource, id: i64) -> String {
        format!("{}/{id}/delete", self.admin_index(resource))
    }

    pub fn admin_listing_photos(&self, listing_id: i64) -> String {
        format!("{}/photos", self.admin_item(AdminResource::Listings, listing_id))
    }

    pub fn admin_photo_delete(&self, listing_id: i64, photo_id: i64) -> String {
        format!("{}/{photo_id}/delete", self.admin_listing_photos(listing_id))
    }

    pub fn admin_listings_export(&self) -> String {
        format!("{}/export", self.admin_index(AdminResource::Listings))
    }

    /// `/theme?return_to=...` for the dark-mode toggle.
    pub fn theme_toggle(&self, return_to: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(return_to.as_bytes()).collect();
        format!("{}?return_to={encoded}", self.theme)
    }
}

/// Segments of `path` below `base`, or `None` when `path` is outside it.
/// `/listings` under `/listings` yields an empty list.
pub fn segments_under<'p>(path: &'p str, base: &str) -> Option<Vec<&'p str>> {
    let base = base.trim_end_matches('/');
    let rest = path.strip_prefix(base)?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    Some(rest.split('/').filter(|s| !s.is_empty()).collect())
}
