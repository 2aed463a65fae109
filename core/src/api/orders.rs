//! Click & Collect orders. The first group is used by customers, the second
//! by vendors working the pickup counter.

use std::fmt::Display;

use crate::error::ApiError;
use crate::http::RequestDescriptor;
use crate::types::{CreateOrder, RejectOrder};

pub fn create_order(notes: Option<&str>) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/orders").with_json(&CreateOrder {
        notes: notes.unwrap_or_default().to_string(),
    })
}

pub fn get_my_orders() -> RequestDescriptor {
    RequestDescriptor::get("/orders/history")
}

pub fn get_order_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/orders/{id}"))
}

pub fn cancel_order(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("/orders/{id}/cancel"))
}

pub fn get_order_by_pickup_code(code: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/orders/pickup/{code}"))
}

pub fn get_pending_orders() -> RequestDescriptor {
    RequestDescriptor::get("/orders/pending")
}

pub fn get_all_orders() -> RequestDescriptor {
    RequestDescriptor::get("/orders/all")
}

pub fn confirm_order(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("/orders/{id}/confirm"))
}

pub fn process_order(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("/orders/{id}/process"))
}

pub fn mark_order_ready(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("/orders/{id}/ready"))
}

pub fn mark_order_complete(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("/orders/{id}/complete"))
}

pub fn reject_order(id: impl Display, reason: &str) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post(format!("/orders/{id}/reject")).with_json(&RejectOrder {
        reason: reason.to_string(),
    })
}
