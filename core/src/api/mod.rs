//! Resource modules: one function per backend operation.
//!
//! Each function only binds a verb, a path under the base URL, query
//! parameters and an optional JSON body into a `RequestDescriptor`. Nothing
//! here touches the network; pass the result to `ApiClient::send`.

pub mod analytics;
pub mod auth;
pub mod cart;
pub mod categories;
pub mod orders;
pub mod products;
pub mod sales;
pub mod shop;
pub mod stock;
pub mod users;

/// Free-form query parameters, forwarded in order.
pub type Params<'a> = &'a [(&'a str, &'a str)];
