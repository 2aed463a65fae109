//! Persisted session access.
//!
//! # Design
//! The client never owns the session: login and logout belong to the host.
//! The client reads the identity entry before every request and, on a 401,
//! deletes both session entries. Storage is reached through the
//! `SessionStore` trait so hosts can back it with whatever persistent
//! key/value store they have and tests can use `MemorySessionStore`.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;

/// Key holding the authentication token.
pub const TOKEN_KEY: &str = "token";
/// Key holding the JSON-serialized identity context.
pub const IDENTITY_KEY: &str = "user";

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Persistent string key/value storage shared with the host's login flow.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory `SessionStore`.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
    }
}

/// The authenticated user as stored by the login flow: `{ "id": 42, "role":
/// "ADMIN", ... }`. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityContext {
    pub id: Value,
    pub role: Value,
}

impl IdentityContext {
    /// Pick `id` and `role` out of a stored JSON object. Anything that is not
    /// an object (arrays, scalars, `null`) carries no identity.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        Some(Self {
            id: fields.remove("id").unwrap_or(Value::Null),
            role: fields.remove("role").unwrap_or(Value::Null),
        })
    }

    /// Header value for the id, or `None` when the id is not truthy
    /// (missing, null, `0`, `false` or `""`).
    pub fn id_header_value(&self) -> Option<String> {
        match &self.id {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// Header value for the role: strings as-is, numbers and booleans in
    /// their JSON spelling. Null, missing and composite roles are omitted.
    pub fn role_header_value(&self) -> Option<String> {
        match &self.role {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// `(name, value)` pairs to attach to an outgoing request.
    pub fn headers(&self) -> Vec<(String, String)> {
        let Some(id) = self.id_header_value() else {
            return Vec::new();
        };
        let mut headers = vec![(USER_ID_HEADER.to_string(), id)];
        if let Some(role) = self.role_header_value() {
            headers.push((USER_ROLE_HEADER.to_string(), role));
        }
        headers
    }
}

/// Read the identity entry from `store`.
///
/// Returns `None` for an absent entry, the literal string `"undefined"`, a
/// value that does not parse, or JSON that is not an object. A parse failure
/// is logged and otherwise ignored: the request goes out anonymously.
pub fn load_identity(store: &dyn SessionStore) -> Option<IdentityContext> {
    let raw = store.get(IDENTITY_KEY)?;
    if raw.is_empty() || raw == "undefined" {
        return None;
    }
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => IdentityContext::from_value(value),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unparsable identity context in session store");
            None
        }
    }
}

/// Remove both session entries.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(IDENTITY_KEY);
}
