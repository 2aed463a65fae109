//! Public catalogue for the Click & Collect shop.

use std::fmt::Display;

use super::Params;
use crate::http::RequestDescriptor;

pub fn get_products(params: Params<'_>) -> RequestDescriptor {
    RequestDescriptor::get("/shop/products").with_params(params.iter().copied())
}

pub fn get_product_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/shop/products/{id}"))
}

/// `categoryId` replaces any value already present in `params`.
pub fn get_products_by_category(category_id: impl Display, params: Params<'_>) -> RequestDescriptor {
    products_without(params, "categoryId").with_query("categoryId", category_id)
}

/// `search` replaces any value already present in `params`.
pub fn search_products(query: &str, params: Params<'_>) -> RequestDescriptor {
    products_without(params, "search").with_query("search", query)
}

fn products_without(params: Params<'_>, key: &str) -> RequestDescriptor {
    RequestDescriptor::get("/shop/products")
        .with_params(params.iter().copied().filter(|(k, _)| *k != key))
}

pub fn get_categories() -> RequestDescriptor {
    RequestDescriptor::get("/shop/categories")
}

pub fn get_category_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/shop/categories/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_is_appended_after_params() {
        let req = get_products_by_category(3, &[("page", "1")]);
        assert_eq!(req.path, "/shop/products");
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("categoryId".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn explicit_filter_overrides_caller_param() {
        let req = get_products_by_category(3, &[("categoryId", "9"), ("page", "1")]);
        assert_eq!(
            req.query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("categoryId".to_string(), "3".to_string()),
            ]
        );

        let req = search_products("pain", &[("search", "riz")]);
        assert_eq!(req.query, vec![("search".to_string(), "pain".to_string())]);
    }

    #[test]
    fn search_uses_search_param() {
        let req = search_products("pain", &[]);
        assert_eq!(req.query, vec![("search".to_string(), "pain".to_string())]);
    }
}
