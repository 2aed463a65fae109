//! Stock management endpoints and availability helpers.

use std::fmt::Display;

use super::Params;
use crate::error::ApiError;
use crate::http::RequestDescriptor;
use crate::types::{AddStock, AdjustStock, StockLevel};

pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

pub fn get_dashboard() -> RequestDescriptor {
    RequestDescriptor::get("/stock/dashboard")
}

pub fn get_low_stock_products() -> RequestDescriptor {
    RequestDescriptor::get("/stock/low")
}

pub fn get_out_of_stock_products() -> RequestDescriptor {
    RequestDescriptor::get("/stock/out")
}

pub fn get_stock_movements(params: Params<'_>) -> RequestDescriptor {
    RequestDescriptor::get("/stock/movements").with_params(params.iter().copied())
}

pub fn add_stock(
    product_id: i64,
    quantity: i64,
    supplier: &str,
    notes: &str,
) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/stock/add").with_json(&AddStock {
        product_id: Some(product_id),
        quantity,
        supplier: supplier.to_string(),
        notes: notes.to_string(),
    })
}

pub fn adjust_stock(product_id: i64, new_quantity: i64, reason: &str) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/stock/adjust").with_json(&AdjustStock {
        product_id: Some(product_id),
        new_quantity,
        reason: reason.to_string(),
    })
}

pub fn add_product_stock(
    product_id: impl Display,
    quantity: i64,
    supplier: &str,
    notes: &str,
) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post(format!("/products/{product_id}/stock/add")).with_json(&AddStock {
        product_id: None,
        quantity,
        supplier: supplier.to_string(),
        notes: notes.to_string(),
    })
}

pub fn adjust_product_stock(
    product_id: impl Display,
    new_quantity: i64,
    reason: &str,
) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post(format!("/products/{product_id}/stock/adjust")).with_json(&AdjustStock {
        product_id: None,
        new_quantity,
        reason: reason.to_string(),
    })
}

/// Stock not held by pending orders, never negative.
pub fn available_stock(level: &StockLevel) -> i64 {
    let stock = level.stock.unwrap_or(0);
    let reserved = level.reserved_stock.unwrap_or(0);
    stock.saturating_sub(reserved).max(0)
}

/// Some stock left, but no more than `threshold` (default 10).
pub fn is_low_stock(level: &StockLevel, threshold: Option<i64>) -> bool {
    let available = available_stock(level);
    available > 0 && available <= threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD)
}

pub fn is_out_of_stock(level: &StockLevel) -> bool {
    available_stock(level) <= 0
}
