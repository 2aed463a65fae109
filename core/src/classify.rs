//! Status classification for the response stage.

use crate::config::ClientConfig;

/// What the client does with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 2xx: handed to the caller unchanged.
    Success,
    /// 401: session torn down, login navigation, notification.
    Unauthorized,
    /// 403: notification only.
    Forbidden,
    /// 404: left to the caller, no notification.
    NotFound,
    /// 5xx: notification unless the path is on the silent list.
    ServerError { silent: bool },
    /// Anything else (1xx, 3xx, other 4xx): rejected without side effects.
    Other,
}

pub fn classify(status: u16, path: &str, config: &ClientConfig) -> ResponseClass {
    match status {
        200..=299 => ResponseClass::Success,
        401 => ResponseClass::Unauthorized,
        403 => ResponseClass::Forbidden,
        404 => ResponseClass::NotFound,
        s if s >= 500 => ResponseClass::ServerError {
            silent: config.is_silent(path),
        },
        _ => ResponseClass::Other,
    }
}
