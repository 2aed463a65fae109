use std::fmt::Display;

use serde::Serialize;

use crate::error::ApiError;
use crate::http::RequestDescriptor;

/// Paging for `GET /users/page`. Defaults: page 0, size 10, sorted by username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "username".to_string(),
        }
    }
}

pub fn get_all() -> RequestDescriptor {
    RequestDescriptor::get("/users")
}

pub fn get_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/users/{id}"))
}

pub fn create<T: Serialize>(data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/users").with_json(data)
}

pub fn update<T: Serialize>(id: impl Display, data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::put(format!("/users/{id}")).with_json(data)
}

pub fn delete(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/users/{id}"))
}

pub fn update_password<T: Serialize>(id: impl Display, data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::put(format!("/users/{id}/password")).with_json(data)
}

pub fn get_by_role(role: &str) -> RequestDescriptor {
    RequestDescriptor::get("/users/role").with_query("role", role)
}

pub fn activate(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::patch(format!("/users/{id}/activate"))
}

pub fn deactivate(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::patch(format!("/users/{id}/deactivate"))
}

pub fn get_paginated(page: &PageRequest) -> RequestDescriptor {
    RequestDescriptor::get("/users/page")
        .with_query("page", page.page)
        .with_query("size", page.size)
        .with_query("sortBy", &page.sort_by)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn activation_uses_patch() {
        assert_eq!(activate(4).method, HttpMethod::Patch);
        assert_eq!(deactivate(4).path, "/users/4/deactivate");
    }

    #[test]
    fn paginated_defaults() {
        let req = get_paginated(&PageRequest::default());
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
    fn by_role_query() {
        assert_eq!(get_by_role("ANALYSTE").query[0].1, "ANALYSTE");
    }
}
