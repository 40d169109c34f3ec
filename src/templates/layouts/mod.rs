pub mod admin;
pub mod desktop;

pub use admin::admin_layout;
pub use desktop::desktop_layout;

use crate::config::SiteSettings;
use crate::routes::Routes;

/// Per-request values every layout needs.
pub struct Chrome<'a> {
    pub settings: &'a SiteSettings,
    pub routes: &'a Routes,
    pub dark: bool,
    /// Path and query of the current request, for the theme toggle's return.
    pub current_url: String,
}
