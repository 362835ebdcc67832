//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against in-memory adapters.  No terminal or catalog file is needed.

mod catalog_tests;
mod device_tests;
mod mock_io;
mod session_tests;
