//! Cursor and boundary decoding tests.
