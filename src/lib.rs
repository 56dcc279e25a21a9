//! Profile executor — library crate for the credential override hook.
//!
//! Re-exports modules needed by the binary and integration tests in `tests/`.

pub mod config;
pub mod errors;
pub mod executor;
pub mod models;
pub mod profile;

pub use executor::profile::ProfileQueryExecutor;
pub use executor::QueryExecutor;
