mod admin_tests;
mod public_tests;
mod search_tests;
