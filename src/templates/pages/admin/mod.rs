pub mod complexes;
pub mod dashboard;
pub mod listings;
pub mod posts;
pub mod testimonials;

pub use complexes::{admin_complex_form, admin_complexes_page};
pub use dashboard::{admin_dashboard_page, DashboardVm};
pub use listings::{admin_listing_form, admin_listings_page, AdminListingsVm};
pub use posts::{admin_post_form, admin_posts_page};
pub use testimonials::{admin_testimonial_form, admin_testimonials_page};

use maud::{html, Markup};

/// POST-only delete with a browser confirm.
pub fn delete_button(action: &str, what: &str) -> Markup {
    html! {
        form action=(action) method="post" class="inline"
            onsubmit=(format!("return confirm('Delete this {what}?');"))
        {
            button type="submit" class="danger" { "Delete" }
        }
    }
}

/// Action target and submit label for a create-or-edit form.
pub fn form_target(create_path: &str, update_path: Option<String>) -> (String, &'static str) {
    match update_path {
        Some(path) => (path, "Save changes"),
        None => (create_path.to_string(), "Create"),
    }
}
