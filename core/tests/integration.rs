//! End-to-end behavior against the live mock backend.
//!
//! # Design
//! Starts the mock backend on a random port, then drives `ApiClient` over real
//! HTTP with `UreqTransport`. Each test gets its own server, session store and
//! event sink, so side effects can be asserted in isolation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use retail_client_core::api::{analytics, auth, orders, products, sales, shop, users};
use retail_client_core::types::Credentials;
use retail_client_core::{
    ApiClient, ApiError, ClientConfig, ClientEvent, ErrorClass, MemorySessionStore, NotificationKind,
    RecordingSink, RequestDescriptor, SessionStore, Transport, UreqTransport, IDENTITY_KEY,
    TOKEN_KEY,
};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_backend::run(listener).await
        })
        .unwrap();
    });

    addr
}

struct Harness {
    client: ApiClient,
    transport: UreqTransport,
    session: Arc<MemorySessionStore>,
    events: Arc<RecordingSink>,
}

fn harness_with(config: impl FnOnce(ClientConfig) -> ClientConfig) -> Harness {
    let addr = start_server();
    let session = Arc::new(MemorySessionStore::new());
    let events = Arc::new(RecordingSink::new());
    let client = ApiClient::new(
        config(ClientConfig::new(&format!("http://{addr}/api"))),
        session.clone(),
        events.clone(),
    );
    let transport = client.default_transport();
    Harness {
        client,
        transport,
        session,
        events,
    }
}

fn harness() -> Harness {
    harness_with(|c| c)
}

fn log_in(h: &Harness, identity: &str) {
    h.session.set(TOKEN_KEY, "mock-token");
    h.session.set(IDENTITY_KEY, identity);
}

#[test]
fn login_then_identity_headers_reach_backend() {
    let h = harness();

    let login: serde_json::Value = h
        .client
        .send_json(
            &h.transport,
            auth::login(&Credentials {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            })
            .unwrap(),
        )
        .unwrap();
    h.session.set(TOKEN_KEY, login["token"].as_str().unwrap());
    h.session.set(IDENTITY_KEY, &login["user"].to_string());

    let echo: serde_json::Value = h
        .client
        .send_json(&h.transport, RequestDescriptor::get("/echo/headers"))
        .unwrap();
    assert_eq!(echo["userId"], "42");
    assert_eq!(echo["userRole"], "ADMIN");
    assert_eq!(echo["contentType"], "application/json");
}

#[test]
fn anonymous_call_sends_no_identity_headers() {
    let h = harness();

    let categories: serde_json::Value = h
        .client
        .send_json(&h.transport, shop::get_categories())
        .unwrap();
    assert_eq!(categories.as_array().unwrap().len(), 2);

    let echo: serde_json::Value = h
        .client
        .send_json(&h.transport, RequestDescriptor::get("/echo/headers"))
        .unwrap();
    assert!(echo["userId"].is_null());
    assert!(echo["userRole"].is_null());
}

#[test]
fn success_body_is_returned_verbatim() {
    let h = harness();
    log_in(&h, r#"{"id":42,"role":"ADMIN"}"#);

    let response = h.client.send(&h.transport, products::get_all(&[])).unwrap();
    assert_eq!(response.status, 200);
    let raw = h
        .transport
        .execute(&h.client.build_request(products::get_all(&[])).unwrap())
        .unwrap();
    assert_eq!(response.body, raw.body);
    assert!(h.events.events().is_empty());
}

#[test]
fn expired_session_is_torn_down() {
    let h = harness();
    log_in(&h, r#"{"id":99,"role":"VENDEUR"}"#);

    let err = h
        .client
        .send(&h.transport, orders::get_pending_orders())
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(err.server_message().as_deref(), Some("Session expirée"));
    assert!(h.session.get(TOKEN_KEY).is_none());
    assert!(h.session.get(IDENTITY_KEY).is_none());
    assert_eq!(
        h.events.events(),
        vec![
            ClientEvent::Navigate {
                route: "/login".to_string()
            },
            ClientEvent::Notify(NotificationKind::SessionExpired.into()),
        ]
    );

    // The next call goes out anonymously.
    let echo: serde_json::Value = h
        .client
        .send_json(&h.transport, RequestDescriptor::get("/echo/headers"))
        .unwrap();
    assert!(echo["userId"].is_null());
}

#[test]
fn forbidden_keeps_session() {
    let h = harness();
    log_in(&h, r#"{"id":7,"role":"VENDEUR"}"#);

    let err = h.client.send(&h.transport, users::delete(3)).unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(h.session.get(TOKEN_KEY).is_some());
    assert!(h.session.get(IDENTITY_KEY).is_some());
    let notifications = h.events.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Forbidden);
}

#[test]
fn not_found_is_left_to_caller() {
    let h = harness();

    let err = h.client.send(&h.transport, products::get_by_id(999)).unwrap_err();

    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.server_message().as_deref(), Some("Produit introuvable"));
    assert!(h.events.events().is_empty());
}

#[test]
fn sales_failure_is_silent() {
    let h = harness();
    log_in(&h, r#"{"id":42,"role":"ADMIN"}"#);

    let err = h.client.send(&h.transport, sales::get_all(&[])).unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.server_message().is_some());
    assert!(h.events.events().is_empty());

    let err = h
        .client
        .send(&h.transport, analytics::get_dashboard())
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(h.events.events().is_empty());
}

#[test]
fn users_failure_is_notified() {
    let h = harness();
    log_in(&h, r#"{"id":42,"role":"ADMIN"}"#);

    let err = h.client.send(&h.transport, users::get_all()).unwrap_err();

    assert!(matches!(
        err,
        ApiError::Server {
            status: 500,
            silent: false,
            ..
        }
    ));
    let notifications = h.events.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, "Erreur serveur. Veuillez réessayer.");
}

#[test]
fn timeout_rejects_without_notification() {
    let h = harness_with(|c| c.with_timeout(Duration::from_millis(200)));
    log_in(&h, r#"{"id":42,"role":"ADMIN"}"#);

    let err = h
        .client
        .send(&h.transport, RequestDescriptor::get("/slow"))
        .unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert_eq!(err.class(), ErrorClass::NetworkOrTimeout);
    assert!(h.events.events().is_empty());
    assert!(h.session.get(IDENTITY_KEY).is_some());
}

#[test]
fn connection_refused_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let events = Arc::new(RecordingSink::new());
    let client = ApiClient::new(
        ClientConfig::new(&format!("http://{addr}/api")),
        Arc::new(MemorySessionStore::new()),
        events.clone(),
    );

    let err = client
        .send(&client.default_transport(), products::get_all(&[]))
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
    assert!(events.events().is_empty());
}

#[test]
fn concurrent_calls_share_one_client() {
    let h = harness();
    log_in(&h, r#"{"id":42,"role":"ADMIN"}"#);

    let handles: Vec<_> = (1..=3)
        .map(|id| {
            let client = h.client.clone();
            let transport = h.transport.clone();
            std::thread::spawn(move || {
                let product: serde_json::Value = client
                    .send_json(&transport, products::get_by_id(id))
                    .unwrap();
                product["id"].as_i64().unwrap()
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);
}
