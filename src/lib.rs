//! Storefront back end for a portrait-art studio: catalog, cart, orders,
//! contact inbox and an admin dashboard over one key-value store.

pub mod api;
pub mod catalog;
pub mod config;
pub mod entities;
pub mod links;
pub mod middleware;
pub mod services;
pub mod state;
pub mod storage;

pub use api::create_api_router;
pub use config::Config;
pub use state::AppState;
