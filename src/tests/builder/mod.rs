//! BackReaderBuilder tests.
