use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the signed-in user, as returned by the authentication backend.
///
/// The named fields are the ones the client reads; every other field is kept
/// in `extra` so a stored profile survives a round trip unchanged. A named
/// field whose value is not a string stays in `extra` verbatim and reads as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for UserProfile {
    fn from(mut extra: Map<String, Value>) -> Self {
        Self {
            first_name: take_string(&mut extra, "first_name"),
            last_name: take_string(&mut extra, "last_name"),
            username: take_string(&mut extra, "username"),
            email: take_string(&mut extra, "email"),
            role: take_string(&mut extra, "role").map(Role::from),
            extra,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !matches!(fields.get(key), Some(Value::String(_))) {
        return None;
    }
    match fields.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

impl UserProfile {
    /// "First Last", skipping whichever half is missing.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Account role. Unknown roles are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Employee,
    User,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
            Role::User => "user",
            Role::Other(name) => name,
        }
    }

    /// Upper-cased label shown on the role badge.
    pub fn badge(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Role::Admin,
            "employee" => Role::Employee,
            "user" => Role::User,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
