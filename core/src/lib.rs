//! HTTP client core for the retail management backend.
//!
//! # Overview
//! Every call to the backend goes through `ApiClient`, which attaches the
//! stored user's identity headers on the way out and applies the shared
//! failure handling on the way back: session teardown on 401, user
//! notifications on 403 and on non-silent 5xx. The resource modules under
//! `api` only describe calls.
//!
//! # Design
//! - Requests and responses are plain data (host-does-IO pattern); a
//!   `Transport` executes the round-trip, `UreqTransport` is the default.
//! - Session storage and side effects are injected (`SessionStore`,
//!   `EventSink`), so the core has no global state and tests need no real
//!   storage or UI.
//! - Failures are classified once and always returned to the caller; the core
//!   never retries.

pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

pub use classify::{classify, ResponseClass};
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError, PathMatcher};
pub use error::{ApiError, ErrorClass, TransportError};
pub use events::{ClientEvent, EventSink, Notification, NotificationKind, NullSink, RecordingSink};
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestDescriptor};
pub use session::{IdentityContext, MemorySessionStore, SessionStore, IDENTITY_KEY, TOKEN_KEY};
pub use transport::{Transport, UreqTransport};
