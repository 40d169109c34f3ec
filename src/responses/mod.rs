pub mod errors;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML response
pub use html::html_response;
pub use redirect::{hx_redirect, no_content, see_other, see_other_with_cookie};
pub use xlsx::xlsx_response;
