pub mod client;
pub mod types;

pub use client::ProfileClient;
pub use types::ProfileCredentials;
