use std::sync::Arc;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::services::{
    admin::{AdminCredentials, AdminService},
    cart::CartService,
    contact::ContactService,
    order::OrderService,
};
use crate::storage::{
    Collection, Flag, KvStore, StoreError, ADMIN_SESSION_KEY, CART_KEY, MESSAGES_KEY, ORDERS_KEY,
};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Failed to prepare admin credentials: {0}")]
    Credentials(String),
}

/// Everything a handler needs, wired over one store.
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub cart: Arc<CartService>,
    pub orders: Arc<OrderService>,
    pub contact: Arc<ContactService>,
    pub admin: AdminService,
}

impl AppState {
    pub async fn build(config: Config, store: Arc<dyn KvStore>) -> Result<Self, StartupError> {
        let credentials = AdminCredentials::new(&config.admin_username, &config.admin_password)
            .map_err(|err| StartupError::Credentials(err.to_string()))?;

        let catalog = Arc::new(Catalog::seeded());
        let cart = Arc::new(CartService::open(Collection::new(store.clone(), CART_KEY)).await?);
        let orders = Arc::new(OrderService::new(
            Collection::new(store.clone(), ORDERS_KEY),
            catalog.clone(),
            cart.clone(),
        ));
        let contact = Arc::new(ContactService::new(Collection::new(store.clone(), MESSAGES_KEY)));
        let admin = AdminService::new(
            credentials,
            Flag::new(store, ADMIN_SESSION_KEY),
            orders.clone(),
            contact.clone(),
        );

        Ok(AppState {
            config,
            catalog,
            cart,
            orders,
            contact,
            admin,
        })
    }
}
