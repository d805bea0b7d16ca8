mod common;
mod naming_tests;
mod suite_tests;
