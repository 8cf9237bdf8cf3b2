mod error_tests;
mod label_filter_tests;
