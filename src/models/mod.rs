pub mod query;
pub mod secret;
