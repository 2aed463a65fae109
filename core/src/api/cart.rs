//! The Click & Collect customer's cart.

use std::fmt::Display;

use crate::error::ApiError;
use crate::http::RequestDescriptor;
use crate::types::{AddCartItem, UpdateCartItem};

pub fn get_cart() -> RequestDescriptor {
    RequestDescriptor::get("/cart")
}

/// `quantity` defaults to 1.
pub fn add_to_cart(product_id: i64, quantity: Option<u32>) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/cart/items").with_json(&AddCartItem {
        product_id,
        quantity: quantity.unwrap_or(1),
    })
}

pub fn update_cart_item(item_id: impl Display, quantity: u32) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::put(format!("/cart/items/{item_id}")).with_json(&UpdateCartItem { quantity })
}

pub fn remove_from_cart(item_id: impl Display) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/cart/items/{item_id}"))
}

pub fn clear_cart() -> RequestDescriptor {
    RequestDescriptor::delete("/cart")
}
