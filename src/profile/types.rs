//! Wire types for the credential service's profile endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::secret::Password;

/// Code the service puts in `code` when the lookup succeeded.
pub const SUCCESS_CODE: &str = "0000";

#[derive(Debug, Serialize)]
pub struct ProfileCredentialsRequest<'a> {
    #[serde(rename = "userName")]
    pub user_name: &'a str,
}

/// Envelope returned by `POST /internal/doris/profile-credentials`.
///
/// `code` is kept as a raw JSON value: the service sends a string, but the
/// check compares its string form so a numeric code is handled too.
#[derive(Debug, Deserialize)]
pub struct ProfileCredentialsResponse {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub data: Option<ProfileData>,
}

impl ProfileCredentialsResponse {
    pub fn code_str(&self) -> String {
        match &self.code {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "null".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code_str() == SUCCESS_CODE
    }
}

/// Inner `data` object. Fields stay raw so a numeric `userName` or
/// `password` is read as its string form, like `code`.
#[derive(Debug, Deserialize)]
pub struct ProfileData {
    #[serde(rename = "userName", default)]
    pub user_name: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl ProfileData {
    pub fn user_name_str(&self) -> Option<String> {
        self.user_name.as_ref().and_then(scalar_string)
    }

    pub fn password(&self) -> Option<Password> {
        self.password.as_ref().and_then(scalar_string).map(Password::from)
    }
}

/// String form of a JSON scalar; `None` for null, objects and arrays.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A validated profile username/password pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCredentials {
    pub user_name: String,
    pub password: Password,
}
