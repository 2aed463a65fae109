//! In-process stand-in for the retail backend.
//!
//! Serves a small product catalogue plus a handful of routes that fail on
//! purpose, so client behavior on 401/403/404/5xx and timeouts can be
//! exercised over real HTTP.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// How long `/api/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub reserved_stock: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

struct Account {
    id: i64,
    username: &'static str,
    password: &'static str,
    role: &'static str,
}

const ACCOUNTS: &[Account] = &[
    Account {
        id: 42,
        username: "admin",
        password: "admin123",
        role: "ADMIN",
    },
    Account {
        id: 7,
        username: "vendeur",
        password: "vendeur123",
        role: "VENDEUR",
    },
];

pub type Db = Arc<RwLock<BTreeMap<i64, Product>>>;

fn seed() -> BTreeMap<i64, Product> {
    [
        (1, "Riz basmati 1kg", 2.45, 40, 4),
        (2, "Lait demi-écrémé 1L", 0.99, 8, 2),
        (3, "Café moulu 250g", 3.20, 0, 0),
    ]
    .into_iter()
    .map(|(id, name, price, stock, reserved_stock)| {
        (
            id,
            Product {
                id,
                name: name.to_string(),
                price,
                stock,
                reserved_stock,
            },
        )
    })
    .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(seed()));
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/shop/categories", get(shop_categories))
        .route("/users", get(list_users))
        .route("/users/{id}", delete(delete_user))
        .route("/sales", get(list_sales))
        .route("/analytics/dashboard", get(analytics_dashboard))
        .route("/orders/pending", get(pending_orders))
        .route("/echo/headers", get(echo_headers))
        .route("/slow", get(slow))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

/// The caller's account, when `X-User-Id` names a known user.
fn caller(headers: &HeaderMap) -> Option<&'static Account> {
    let id: i64 = header(headers, USER_ID_HEADER)?.parse().ok()?;
    ACCOUNTS.iter().find(|a| a.id == id)
}

async fn login(Json(input): Json<Credentials>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let account = ACCOUNTS
        .iter()
        .find(|a| a.username == input.username && a.password == input.password)
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "Identifiants invalides"))?;
    tracing::info!(user = account.username, "login");
    Ok(Json(json!({
        "token": format!("mock-token-{}", account.id),
        "user": { "id": account.id, "username": account.username, "role": account.role },
    })))
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    let products = db.read().await;
    Json(products.values().cloned().collect())
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<CreateProduct>,
) -> (StatusCode, Json<Product>) {
    let mut products = db.write().await;
    let id = products.keys().next_back().copied().unwrap_or(0) + 1;
    let product = Product {
        id,
        name: input.name,
        price: input.price,
        stock: input.stock,
        reserved_stock: 0,
    };
    products.insert(id, product.clone());
    (StatusCode::CREATED, Json(product))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, (StatusCode, Json<Value>)> {
    let products = db.read().await;
    products
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Produit introuvable"))
}

async fn shop_categories() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "Épicerie" },
        { "id": 2, "name": "Crèmerie" },
    ]))
}

async fn list_users() -> (StatusCode, Json<Value>) {
    error(StatusCode::INTERNAL_SERVER_ERROR, "Base utilisateurs indisponible")
}

async fn delete_user(
    headers: HeaderMap,
    Path(_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    match caller(&headers) {
        Some(account) if account.role == "ADMIN" => Ok(StatusCode::NO_CONTENT),
        Some(_) => Err(error(StatusCode::FORBIDDEN, "Rôle ADMIN requis")),
        None => Err(error(StatusCode::UNAUTHORIZED, "Non authentifié")),
    }
}

async fn list_sales() -> (StatusCode, Json<Value>) {
    error(StatusCode::INTERNAL_SERVER_ERROR, "Agrégation des ventes en cours")
}

async fn analytics_dashboard() -> (StatusCode, Json<Value>) {
    error(StatusCode::SERVICE_UNAVAILABLE, "Service analytique indisponible")
}

async fn pending_orders(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    caller(&headers).ok_or_else(|| error(StatusCode::UNAUTHORIZED, "Session expirée"))?;
    Ok(Json(json!([])))
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "userId": header(&headers, USER_ID_HEADER),
        "userRole": header(&headers, USER_ROLE_HEADER),
        "contentType": header(&headers, "content-type"),
    }))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(SLOW_DELAY).await;
    Json(json!({ "status": "late" }))
}
