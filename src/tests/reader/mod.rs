//! Reader tests.

mod file_tests;
