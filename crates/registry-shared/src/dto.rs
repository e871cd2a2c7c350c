//! Data Transfer Objects - request/response types for the registry API.
//!
//! Projects, tasks and users are forwarded as opaque JSON objects: only the
//! identifier is typed, every other field lands in `attributes`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

/// Response to a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `users/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewUser {
    pub attributes: Map<String, Value>,
}

/// Payload of `credentials/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            extra: Map::new(),
        }
    }
}

/// A registered user as returned by the user queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    pub attributes: Map<String, Value>,
}

impl User {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// A project record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Project {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// A task record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Task {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
