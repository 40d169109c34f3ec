pub mod about;
pub mod admin;
pub mod complexes;
pub mod home;
pub mod listing;
pub mod listings;
pub mod posts;

pub use about::about_page;
pub use complexes::{complex_page, complexes_page};
pub use home::{home_page, HomeVm};
pub use listing::listing_page;
pub use listings::{listings_page, ListingsVm};
pub use posts::{post_page, posts_page};
