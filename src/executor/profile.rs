//! Credential override hook.
//!
//! Runs queries as the caller's per-user Doris profile account instead of
//! the shared account stored on the database descriptor. The lookup is
//! best-effort: any failure is logged and the query runs with the stored
//! credentials. Execution is always handed to the delegate.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, warn};

use super::QueryExecutor;
use crate::config::Config;
use crate::models::query::{QueryResponse, QueryStatement};
use crate::profile::ProfileClient;

pub struct ProfileQueryExecutor {
    /// `None` when the base URL or token is missing; the hook is then off.
    client: Option<ProfileClient>,
    delegate: Arc<dyn QueryExecutor>,
}

impl ProfileQueryExecutor {
    /// Build the hook around `delegate`.
    ///
    /// Missing configuration yields a hook whose `accept` is always false.
    /// A malformed base URL still enables the hook; each lookup then fails
    /// and the query runs with the stored credentials.
    pub fn new(config: &Config, delegate: Arc<dyn QueryExecutor>) -> anyhow::Result<Self> {
        let client = match (config.base_url(), config.internal_token()) {
            (Some(base), Some(token)) => Some(
                ProfileClient::new(base, token, config.timeout())
                    .context("failed to build profile credential client")?,
            ),
            _ => None,
        };

        Ok(Self { client, delegate })
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// The statement the delegate should run: either `statement` itself or a
    /// copy carrying the caller's profile credentials.
    async fn resolve(&self, statement: &QueryStatement) -> Option<QueryStatement> {
        let client = self.client.as_ref()?;

        let user_name = match statement.user_name() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return None,
        };

        match client.fetch(user_name).await {
            Ok(credentials) => {
                debug!(
                    statement_id = %statement.id,
                    user = user_name,
                    profile_user = %credentials.user_name,
                    "using profile credentials"
                );
                Some(statement.with_credentials(&credentials))
            }
            Err(e) => {
                warn!(
                    statement_id = %statement.id,
                    user = user_name,
                    endpoint = %client.endpoint(),
                    kind = e.kind(),
                    error = %e,
                    "profile credential lookup failed, using default credentials"
                );
                None
            }
        }
    }
}

#[async_trait]
impl QueryExecutor for ProfileQueryExecutor {
    fn accept(&self, statement: &QueryStatement) -> bool {
        statement.user.is_some() && statement.database().is_some() && self.is_enabled()
    }

    async fn execute(&self, statement: &QueryStatement) -> anyhow::Result<QueryResponse> {
        match self.resolve(statement).await {
            Some(resolved) => self.delegate.execute(&resolved).await,
            None => self.delegate.execute(statement).await,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::query::{DatabaseDescriptor, Ontology, User};

    struct NoopExecutor;

    #[async_trait]
    impl QueryExecutor for NoopExecutor {
        fn accept(&self, _statement: &QueryStatement) -> bool {
            true
        }

        async fn execute(&self, statement: &QueryStatement) -> anyhow::Result<QueryResponse> {
            Ok(QueryResponse {
                sql: statement.sql.clone(),
                ..QueryResponse::default()
            })
        }
    }

    fn enabled_config() -> Config {
        Config {
            base_url: Some("http://127.0.0.1:8000".into()),
            internal_token: Some("internal-token".into()),
            ..Config::default()
        }
    }

    fn full_statement() -> QueryStatement {
        QueryStatement::new("SELECT 1")
            .with_user(User::named("alice"))
            .with_ontology(Ontology::on(DatabaseDescriptor::default()))
    }

    #[test]
    fn test_accepts_complete_statement_when_enabled() {
        let hook = ProfileQueryExecutor::new(&enabled_config(), Arc::new(NoopExecutor)).unwrap();
        assert!(hook.is_enabled());
        assert!(hook.accept(&full_statement()));
    }

    #[test]
    fn test_rejects_incomplete_statements() {
        let hook = ProfileQueryExecutor::new(&enabled_config(), Arc::new(NoopExecutor)).unwrap();

        let no_user = QueryStatement::new("SELECT 1")
            .with_ontology(Ontology::on(DatabaseDescriptor::default()));
        assert!(!hook.accept(&no_user));

        let no_ontology = QueryStatement::new("SELECT 1").with_user(User::named("alice"));
        assert!(!hook.accept(&no_ontology));

        let no_database = QueryStatement::new("SELECT 1")
            .with_user(User::named("alice"))
            .with_ontology(Ontology::default());
        assert!(!hook.accept(&no_database));
    }

    #[test]
    fn test_disabled_without_config() {
        let hook = ProfileQueryExecutor::new(&Config::default(), Arc::new(NoopExecutor)).unwrap();
        assert!(!hook.is_enabled());
        assert!(!hook.accept(&full_statement()));

        let blank_token = Config {
            internal_token: Some("  ".into()),
            ..enabled_config()
        };
        let hook = ProfileQueryExecutor::new(&blank_token, Arc::new(NoopExecutor)).unwrap();
        assert!(!hook.accept(&full_statement()));
    }

    #[tokio::test]
    async fn test_malformed_base_url_falls_back_to_delegate() {
        let bad = Config {
            base_url: Some("127.0.0.1:8000".into()),
            ..enabled_config()
        };
        let hook = ProfileQueryExecutor::new(&bad, Arc::new(NoopExecutor)).unwrap();
        assert!(hook.accept(&full_statement()));

        let resp = hook.execute(&full_statement()).await.unwrap();
        assert_eq!(resp.sql, "SELECT 1");
    }

    #[tokio::test]
    async fn test_disabled_hook_still_delegates() {
        let hook = ProfileQueryExecutor::new(&Config::default(), Arc::new(NoopExecutor)).unwrap();
        let resp = hook.execute(&full_statement()).await.unwrap();
        assert_eq!(resp.sql, "SELECT 1");
    }
}
