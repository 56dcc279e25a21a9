// Query request model: the slice of the semantic layer's objects the
// executor chain needs to pick credentials and hand a statement on.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::secret::Password;
use crate::profile::ProfileCredentials;

#[derive(Debug, Clone, Deserialize)]
pub struct QueryStatement {
    /// Correlates log lines for one query across executors.
    pub id: Uuid,
    pub user: Option<User>,
    pub ontology: Option<Ontology>,
    pub sql: String,
}

impl QueryStatement {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: None,
            ontology: None,
            sql: sql.into(),
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_ontology(mut self, ontology: Ontology) -> Self {
        self.ontology = Some(ontology);
        self
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.name.as_deref())
    }

    pub fn database(&self) -> Option<&DatabaseDescriptor> {
        self.ontology.as_ref().and_then(|o| o.database.as_ref())
    }

    /// Copy of this statement whose database descriptor carries `credentials`.
    ///
    /// Username and password are swapped together. A statement without a
    /// database is returned unchanged.
    pub fn with_credentials(&self, credentials: &ProfileCredentials) -> Self {
        let mut next = self.clone();
        if let Some(db) = next.ontology.as_mut().and_then(|o| o.database.as_mut()) {
            db.username = credentials.user_name.clone();
            db.password = credentials.password.clone();
        }
        next
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub name: Option<String>,
}

impl User {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ontology {
    pub database: Option<DatabaseDescriptor>,
}

impl Ontology {
    pub fn on(database: DatabaseDescriptor) -> Self {
        Self {
            database: Some(database),
        }
    }
}

/// Connection record for the analytic database a query runs against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseDescriptor {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub username: String,
    pub password: Password,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub sql: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doris() -> DatabaseDescriptor {
        DatabaseDescriptor {
            id: 1,
            name: "doris".into(),
            url: "jdbc:mysql://doris:9030/dw".into(),
            username: "root".into(),
            password: Password::new("default"),
        }
    }

    #[test]
    fn test_with_credentials_replaces_pair_on_copy() {
        let stmt = QueryStatement::new("SELECT 1")
            .with_user(User::named("alice"))
            .with_ontology(Ontology::on(doris()));

        let creds = ProfileCredentials {
            user_name: "alice_profile".into(),
            password: Password::new("p@ss"),
        };
        let next = stmt.with_credentials(&creds);

        let db = next.database().unwrap();
        assert_eq!(db.username, "alice_profile");
        assert_eq!(db.password.expose(), "p@ss");
        assert_eq!(next.id, stmt.id);

        // original untouched
        let orig = stmt.database().unwrap();
        assert_eq!(orig.username, "root");
        assert_eq!(orig.password.expose(), "default");
    }

    #[test]
    fn test_with_credentials_without_database_is_noop() {
        let stmt = QueryStatement::new("SELECT 1").with_ontology(Ontology::default());
        let creds = ProfileCredentials {
            user_name: "u".into(),
            password: Password::new("p"),
        };
        assert!(stmt.with_credentials(&creds).database().is_none());
    }

    #[test]
    fn test_user_name_accessor() {
        assert_eq!(QueryStatement::new("x").user_name(), None);
        let stmt = QueryStatement::new("x").with_user(User::default());
        assert_eq!(stmt.user_name(), None);
        let stmt = QueryStatement::new("x").with_user(User::named("bob"));
        assert_eq!(stmt.user_name(), Some("bob"));
    }

    #[test]
    fn test_descriptor_debug_hides_password() {
        let printed = format!("{:?}", doris());
        assert!(!printed.contains("default"));
        assert!(printed.contains("Password(***)"));
    }
}
