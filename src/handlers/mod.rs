pub mod admin;
pub mod assets;
pub mod public;
pub mod search;
