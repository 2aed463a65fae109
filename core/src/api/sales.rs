use std::fmt::Display;

use serde::Serialize;

use super::Params;
use crate::error::ApiError;
use crate::http::RequestDescriptor;

pub const DEFAULT_RECENT_LIMIT: u32 = 10;

pub fn get_all(params: Params<'_>) -> RequestDescriptor {
    RequestDescriptor::get("/sales").with_params(params.iter().copied())
}

pub fn get_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/sales/{id}"))
}

pub fn create<T: Serialize>(data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/sales").with_json(data)
}

pub fn update<T: Serialize>(id: impl Display, data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::put(format!("/sales/{id}")).with_json(data)
}

pub fn delete(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/sales/{id}"))
}

pub fn cancel(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("/sales/{id}/cancel"))
}

/// Dates are passed through as the backend expects them (ISO `yyyy-mm-dd`).
pub fn get_by_date_range(start_date: &str, end_date: &str) -> RequestDescriptor {
    RequestDescriptor::get("/sales/range")
        .with_query("startDate", start_date)
        .with_query("endDate", end_date)
}

pub fn get_recent(limit: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/sales/recent").with_query("limit", limit.unwrap_or(DEFAULT_RECENT_LIMIT))
}

pub fn get_stats() -> RequestDescriptor {
    RequestDescriptor::get("/sales/stats")
}
