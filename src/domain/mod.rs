pub mod complex;
pub mod listing;
pub mod page;
pub mod post;
pub mod testimonial;

pub use complex::{ComplexInput, ComplexSummary, ListingComplex};
pub use listing::{Listing, ListingInput, ListingStatus, ListingSummary, Photo};
pub use page::Page;
pub use post::{Post, PostInput};
pub use testimonial::{Testimonial, TestimonialInput};
