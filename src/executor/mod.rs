pub mod profile;

use async_trait::async_trait;

use crate::models::query::{QueryResponse, QueryStatement};

/// A component that can run a query statement.
/// Implementations: ProfileQueryExecutor (credential override), plus
/// whatever JDBC-style executor the host wires in as the delegate.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Whether this executor is able to handle `statement`.
    fn accept(&self, statement: &QueryStatement) -> bool;

    /// Run the statement and return its result set.
    async fn execute(&self, statement: &QueryStatement) -> anyhow::Result<QueryResponse>;
}
