use crate::error::ApiError;
use crate::http::RequestDescriptor;
use crate::types::Credentials;

pub fn login(credentials: &Credentials) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/auth/login").with_json(credentials)
}

pub fn register<T: serde::Serialize>(user: &T) -> Result<RequestDescriptor, ApiError> {
    RequestDescriptor::post("/auth/register").with_json(user)
}

pub fn logout() -> RequestDescriptor {
    RequestDescriptor::post("/auth/logout")
}

pub fn me() -> RequestDescriptor {
    RequestDescriptor::get("/auth/me")
}

pub fn refresh_token() -> RequestDescriptor {
    RequestDescriptor::post("/auth/refresh")
}
