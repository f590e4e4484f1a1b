//! ReaderOptions tests.
