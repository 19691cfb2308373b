#![allow(dead_code)]

use reqwest::{header, Client, StatusCode};
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

use portrait_storefront::entities::setup_schema;
use portrait_storefront::storage::{DbStore, KvStore};
use portrait_storefront::{create_api_router, AppState, Config};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestApp {
    pub base: String,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get_json(&self, path: &str) -> Value {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        response
            .json::<Value>()
            .await
            .expect("Failed to parse response JSON")
    }

    pub async fn add_to_cart(&self, artwork_id: &str) -> Value {
        let response = self
            .client
            .post(self.url("/api/cart"))
            .json(&json!({ "artworkId": artwork_id }))
            .send()
            .await
            .expect("Failed to send add to cart request");
        assert_eq!(response.status(), StatusCode::CREATED);
        response
            .json::<Value>()
            .await
            .expect("Failed to parse add to cart response JSON")
    }

    pub async fn place_order(&self, checkout: Value) -> Value {
        let response = self
            .client
            .post(self.url("/api/order"))
            .json(&order_payload(checkout))
            .send()
            .await
            .expect("Failed to send order request");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response
            .json::<Value>()
            .await
            .expect("Failed to parse order response JSON");
        body["order"].clone()
    }

    pub async fn login(&self) -> header::HeaderMap {
        let response = self
            .client
            .post(self.url("/api/admin/login"))
            .json(&json!({
                "username": ADMIN_USERNAME,
                "password": ADMIN_PASSWORD
            }))
            .send()
            .await
            .expect("Failed to send login request");
        assert_eq!(response.status(), StatusCode::OK);

        let body = response
            .json::<Value>()
            .await
            .expect("Failed to parse login response JSON");
        let token = body["token"]
            .as_str()
            .expect("Token not found in login response");

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))
                .expect("Failed to create Authorization header"),
        );
        headers
    }
}

pub fn order_payload(checkout: Value) -> Value {
    json!({
        "name": "Lakshmi",
        "phone": "9876501234",
        "email": "lakshmi@example.com",
        "address": "7 Temple Street",
        "city": "Madurai",
        "pincode": "625001",
        "customRequirements": "Pencil, A3 size",
        "referencePhotoName": "grandparents.jpg",
        "checkout": checkout
    })
}

/// Serves the real router on an ephemeral port over an in-memory database.
pub async fn spawn_app() -> TestApp {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    setup_schema(&db).await.expect("Failed to create schema");

    let config = Config {
        database_url: "sqlite::memory:".to_owned(),
        bind_addr: "127.0.0.1:0".parse().expect("Invalid bind address"),
        secret: "test-secret".to_owned(),
        admin_username: ADMIN_USERNAME.to_owned(),
        admin_password: ADMIN_PASSWORD.to_owned(),
    };
    let store: Arc<dyn KvStore> = Arc::new(DbStore::new(Arc::new(db)));
    let state = AppState::build(config, store)
        .await
        .expect("Failed to build app state");
    let app = create_api_router(Arc::new(state));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    TestApp {
        base: format!("http://{}", addr),
        client: Client::new(),
    }
}
