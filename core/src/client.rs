//! The request/response pipeline shared by every resource module.
//!
//! # Design
//! `ApiClient` holds configuration plus two injected capabilities: the session
//! store it reads identity from and the event sink it reports side effects
//! to. A call goes through two stages:
//!
//! - `build_request` resolves a `RequestDescriptor` against the base URL,
//!   applies default and per-call headers, and injects the identity headers
//!   when a usable identity is stored.
//! - `handle_response` classifies the response, performs the side effects for
//!   its class, and passes 2xx through untouched. Every failure is returned as
//!   an `ApiError` carrying the original status and body.
//!
//! `send` chains both stages around a `Transport`. No retries, no
//! deduplication, no ordering between concurrent calls.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::classify::{classify, ResponseClass};
use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::events::{ClientEvent, EventSink, Notification, NotificationKind};
use crate::http::{set_header, HttpRequest, HttpResponse, RequestDescriptor};
use crate::session::{clear_session, load_identity, SessionStore};
use crate::transport::{Transport, UreqTransport};

#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
    events: Arc<dyn EventSink>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: Arc<dyn SessionStore>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            session,
            events,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A `UreqTransport` using this client's timeout.
    pub fn default_transport(&self) -> UreqTransport {
        UreqTransport::new(self.config.timeout)
    }

    pub fn build_request(&self, descriptor: RequestDescriptor) -> Result<HttpRequest, ApiError> {
        if descriptor.path.is_empty() {
            return Err(ApiError::InvalidPath);
        }

        let mut headers = self.config.default_headers.clone();
        for (k, v) in &descriptor.headers {
            set_header(&mut headers, k, v);
        }
        match load_identity(self.session.as_ref()) {
            Some(identity) => {
                for (k, v) in identity.headers() {
                    set_header(&mut headers, &k, &v);
                }
            }
            None => tracing::debug!(path = %descriptor.path, "no identity context, sending anonymously"),
        }

        Ok(HttpRequest {
            method: descriptor.method,
            url: self.resolve_url(&descriptor.path, &descriptor.query),
            path: descriptor.path,
            headers,
            body: descriptor.body,
        })
    }

    pub fn handle_response(
        &self,
        request: &HttpRequest,
        response: HttpResponse,
    ) -> Result<HttpResponse, ApiError> {
        let class = classify(response.status, &request.path, &self.config);
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            status = response.status,
            ?class,
            "response received"
        );

        match class {
            ResponseClass::Success => Ok(response),
            ResponseClass::Unauthorized => {
                tracing::info!(path = %request.path, "session rejected by server, clearing stored session");
                clear_session(self.session.as_ref());
                self.events.emit(ClientEvent::Navigate {
                    route: self.config.login_route.clone(),
                });
                self.notify(NotificationKind::SessionExpired);
                Err(ApiError::Unauthorized { body: response.body })
            }
            ResponseClass::Forbidden => {
                self.notify(NotificationKind::Forbidden);
                Err(ApiError::Forbidden { body: response.body })
            }
            ResponseClass::NotFound => Err(ApiError::NotFound { body: response.body }),
            ResponseClass::ServerError { silent } => {
                if !silent {
                    self.notify(NotificationKind::ServerError);
                }
                Err(ApiError::Server {
                    status: response.status,
                    body: response.body,
                    silent,
                })
            }
            ResponseClass::Other => Err(ApiError::Http {
                status: response.status,
                body: response.body,
            }),
        }
    }

    /// Transport failures are propagated without side effects.
    pub fn handle_transport_error(&self, request: &HttpRequest, err: TransportError) -> ApiError {
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            error = %err,
            "transport failure"
        );
        ApiError::Transport(err)
    }

    pub fn send<T: Transport + ?Sized>(
        &self,
        transport: &T,
        descriptor: RequestDescriptor,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(descriptor)?;
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        match transport.execute(&request) {
            Ok(response) => self.handle_response(&request, response),
            Err(err) => Err(self.handle_transport_error(&request, err)),
        }
    }

    /// `send`, then deserialize the 2xx body.
    pub fn send_json<R, T>(&self, transport: &T, descriptor: RequestDescriptor) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        T: Transport + ?Sized,
    {
        let response = self.send(transport, descriptor)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn notify(&self, kind: NotificationKind) {
        self.events.emit(ClientEvent::Notify(Notification::from(kind)));
    }

    fn resolve_url(&self, path: &str, query: &[(String, String)]) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&encoded);
        }
        url
    }
}
