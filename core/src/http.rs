//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. Resource modules produce a
//! `RequestDescriptor` (method, relative path, query, body, per-call header
//! overrides); `ApiClient` turns it into a fully resolved `HttpRequest` with
//! the base URL applied and the identity headers injected. Whoever executes the
//! round-trip hands back an `HttpResponse`.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! threads and logged without lifetime concerns.

use serde::Serialize;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A call as described by a resource module, before the client resolves it.
///
/// `path` is relative to the configured base URL (`/products/7`). Headers set
/// here override the client's default headers of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Append a query parameter. Order is preserved in the final URL.
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append every pair from `params`, skipping none.
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }
}

/// An HTTP request ready to be executed.
///
/// Built by `ApiClient::build_request`. `url` is absolute and already carries
/// the encoded query string; `path` keeps the relative path the call was made
/// with so the response stage can match it against silent endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Insert or replace `key`, matching existing names case-insensitively.
pub(crate) fn set_header(headers: &mut Vec<(String, String)>, key: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
        Some(entry) => entry.1 = value.to_string(),
        None => headers.push((key.to_string(), value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builders_set_method_and_path() {
        let req = RequestDescriptor::patch("/users/3/activate");
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "/users/3/activate");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn with_query_keeps_insertion_order() {
        let req = RequestDescriptor::get("/users/page")
            .with_query("page", 0)
            .with_query("size", 10)
            .with_query("sortBy", "username");
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "0".to_string()),
                ("size".to_string(), "10".to_string()),
                ("sortBy".to_string(), "username".to_string()),
            ]
        );
    }

    #[test]
    fn with_json_serializes_body() {
        let req = RequestDescriptor::post("/orders")
            .with_json(&serde_json::json!({ "notes": "" }))
            .unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["notes"], "");
    }

    #[test]
    fn set_header_replaces_case_insensitively() {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        set_header(&mut headers, "content-type", "multipart/form-data");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].1, "multipart/form-data");
    }

    #[test]
    fn response_header_lookup_ignores_case() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("X-Request-Id".to_string(), "abc".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("x-request-id"), Some("abc"));
        assert_eq!(response.header("missing"), None);
    }
}
