use std::fmt::Display;

use serde::Serialize;

use crate::error::ApiError;
use crate::http::RequestDescriptor;

pub fn get_all() -> RequestDescriptor {
    RequestDescriptor::get("/categories")
}

pub fn get_by_id(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/categories/{id}"))
}

pub fn create<T: Serialize>(data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/categories").with_json(data)
}

pub fn update<T: Serialize>(id: impl Display, data: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::put(format!("/categories/{id}")).with_json(data)
}

pub fn delete(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::delete(format!("/categories/{id}"))
}

pub fn get_stats(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::get(format!("/categories/{id}/stats"))
}
