use std::fmt::Display;

use serde::Serialize;

use super::Params;
use crate::error::ApiError;
use crate::http::RequestDescriptor;

pub const DEFAULT_TOP_SELLING_LIMIT: u32 = 10;

pub fn get_all(params: Params<'_>) -> RequestDescriptor {
    RequestDescriptor::get("/products").with_params(params.iter().copied())
}

pub fn get_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/products/{id}"))
}

pub fn create<T: Serialize>(data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/products").with_json(data)
}

pub fn update<T: Serialize>(id: impl Display, data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::put(format!("/products/{id}")).with_json(data)
}

pub fn delete(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/products/{id}"))
}

pub fn search(query: &str) -> RequestDescriptor {
    RequestDescriptor::get("/products/search").with_query("q", query)
}

pub fn get_by_category(category_id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/products/category/{category_id}"))
}

pub fn get_low_stock() -> RequestDescriptor {
    RequestDescriptor::get("/products/low-stock")
}

/// `limit` defaults to 10.
pub fn get_top_selling(limit: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/products/top-selling")
        .with_query("limit", limit.unwrap_or(DEFAULT_TOP_SELLING_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    #[test]
    fn crud_paths() {
        assert_eq!(get_by_id(7).path, "/products/7");
        assert_eq!(delete(7).method, HttpMethod::Delete);
        let req = update(7, &serde_json::json!({ "price": 2.5 })).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/products/7");
    }

    #[test]
    fn get_all_forwards_params() {
        let req = get_all(&[("page", "2"), ("categoryId", "4")]);
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("categoryId".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn search_uses_q() {
        let req = search("lait");
        assert_eq!(req.path, "/products/search");
        assert_eq!(req.query, vec![("q".to_string(), "lait".to_string())]);
    }

    #[test]
    fn top_selling_defaults_to_ten() {
        assert_eq!(
            get_top_selling(None).query,
            vec![("limit".to_string(), "10".to_string())]
        );
        assert_eq!(get_top_selling(Some(3)).query[0].1, "3");
    }
}
