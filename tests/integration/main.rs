//! Integration tests against a mock wiki

mod crawl_tests;
mod page_tests;
