//! Admin dashboard: login gate, order/message management and statistics.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use super::contact::{ContactMessage, ContactService};
use super::order::{Order, OrderService, OrderStatus};
use super::ServiceError;
use crate::storage::{Flag, StoreError};

/// The single admin account. The password is only kept as an argon2 hash.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Result<Self, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(AdminCredentials {
            username: username.to_owned(),
            password_hash,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn check(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub delivered_orders: usize,
    /// Sum of totals over delivered orders only.
    pub total_revenue: u64,
}

impl DashboardStats {
    pub fn of(orders: &[Order]) -> Self {
        orders.iter().fold(
            DashboardStats {
                total_orders: orders.len(),
                ..Default::default()
            },
            |mut stats, order| {
                match order.status {
                    OrderStatus::Pending => stats.pending_orders += 1,
                    OrderStatus::Delivered => {
                        stats.delivered_orders += 1;
                        stats.total_revenue += order.total;
                    }
                    OrderStatus::Processing => {}
                }
                stats
            },
        )
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub orders: Vec<Order>,
    pub messages: Vec<ContactMessage>,
}

pub struct AdminService {
    credentials: AdminCredentials,
    session: Flag,
    orders: Arc<OrderService>,
    contact: Arc<ContactService>,
}

impl AdminService {
    pub fn new(
        credentials: AdminCredentials,
        session: Flag,
        orders: Arc<OrderService>,
        contact: Arc<ContactService>,
    ) -> Self {
        AdminService {
            credentials,
            session,
            orders,
            contact,
        }
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// LoggedOut -> LoggedIn. No lockout on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ServiceError> {
        if !self.credentials.check(username, password) {
            warn!(username = %username, "Rejected admin login");
            return Err(ServiceError::InvalidCredentials);
        }
        self.session.set().await?;
        info!(username = %username, "Admin logged in");
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), StoreError> {
        self.session.clear().await?;
        info!("Admin logged out");
        Ok(())
    }

    pub async fn is_logged_in(&self) -> Result<bool, StoreError> {
        self.session.is_set().await
    }

    /// Full reload: both lists plus stats derived by scanning the orders.
    pub async fn dashboard(&self) -> Result<Dashboard, StoreError> {
        let orders = self.orders.list().await?;
        let messages = self.contact.list().await?;
        Ok(Dashboard {
            stats: DashboardStats::of(&orders),
            orders,
            messages,
        })
    }

    pub async fn orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, StoreError> {
        let mut orders = self.orders.list().await?;
        if let Some(status) = status {
            orders.retain(|order| order.status == status);
        }
        Ok(orders)
    }

    pub async fn set_order_status(&self, id: &str, status: OrderStatus) -> Result<Order, ServiceError> {
        self.orders.set_status(id, status).await
    }

    pub async fn delete_order(&self, id: &str) -> Result<(), ServiceError> {
        self.orders.delete(id).await
    }

    pub async fn messages(&self) -> Result<Vec<ContactMessage>, StoreError> {
        self.contact.list().await
    }

    pub async fn delete_message(&self, id: &str) -> Result<(), ServiceError> {
        self.contact.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::services::cart::CartService;
    use crate::services::order::{Checkout, OrderForm};
    use crate::storage::{
        Collection, KvStore, MemoryStore, ADMIN_SESSION_KEY, CART_KEY, MESSAGES_KEY, ORDERS_KEY,
    };

    async fn admin() -> AdminService {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::default());
        let cart = Arc::new(
            CartService::open(Collection::new(store.clone(), CART_KEY))
                .await
                .unwrap(),
        );
        let orders = Arc::new(OrderService::new(
            Collection::new(store.clone(), ORDERS_KEY),
            Arc::new(Catalog::seeded()),
            cart,
        ));
        let contact = Arc::new(ContactService::new(Collection::new(store.clone(), MESSAGES_KEY)));
        AdminService::new(
            AdminCredentials::new("admin", "admin123").unwrap(),
            Flag::new(store, ADMIN_SESSION_KEY),
            orders,
            contact,
        )
    }

    async fn place(admin: &AdminService, artwork_id: &str) -> Order {
        let form = OrderForm {
            name: "Divya".into(),
            phone: "9000000000".into(),
            address: "4 Lake Road".into(),
            ..Default::default()
        };
        admin
            .orders
            .submit(
                form,
                Checkout::Artwork {
                    artwork_id: artwork_id.into(),
                },
            )
            .await
            .unwrap()
    }

    #[test]
    fn credentials_need_exact_match() {
        let credentials = AdminCredentials::new("admin", "admin123").unwrap();
        assert!(credentials.check("admin", "admin123"));
        assert!(!credentials.check("Admin", "admin123"));
        assert!(!credentials.check("admin", "admin1234"));
    }

    #[tokio::test]
    async fn login_sets_and_logout_clears_session() {
        let admin = admin().await;
        assert!(!admin.is_logged_in().await.unwrap());

        assert!(matches!(
            admin.login("admin", "wrong").await,
            Err(ServiceError::InvalidCredentials)
        ));
        assert!(!admin.is_logged_in().await.unwrap());

        admin.login("admin", "admin123").await.unwrap();
        assert!(admin.is_logged_in().await.unwrap());

        admin.logout().await.unwrap();
        assert!(!admin.is_logged_in().await.unwrap());
    }

    #[tokio::test]
    async fn revenue_tracks_delivered_orders_only() {
        let admin = admin().await;
        let family = place(&admin, "family-portrait-premium").await;
        let baby = place(&admin, "baby-portrait-classic").await;

        let stats = admin.dashboard().await.unwrap().stats;
        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.pending_orders, 2);
        assert_eq!(stats.total_revenue, 0);

        admin
            .set_order_status(&family.id, OrderStatus::Delivered)
            .await
            .unwrap();
        admin
            .set_order_status(&baby.id, OrderStatus::Processing)
            .await
            .unwrap();
        let stats = admin.dashboard().await.unwrap().stats;
        assert_eq!(stats.delivered_orders, 1);
        assert_eq!(stats.pending_orders, 0);
        assert_eq!(stats.total_revenue, family.total);

        admin
            .set_order_status(&family.id, OrderStatus::Pending)
            .await
            .unwrap();
        assert_eq!(admin.dashboard().await.unwrap().stats.total_revenue, 0);
    }

    #[tokio::test]
    async fn deleted_order_leaves_list_and_stats() {
        let admin = admin().await;
        let order = place(&admin, "single-portrait-professional").await;
        admin
            .set_order_status(&order.id, OrderStatus::Delivered)
            .await
            .unwrap();

        admin.delete_order(&order.id).await.unwrap();

        let dashboard = admin.dashboard().await.unwrap();
        assert!(dashboard.orders.iter().all(|kept| kept.id != order.id));
        assert_eq!(dashboard.stats, DashboardStats::default());
    }

    #[tokio::test]
    async fn orders_filter_by_status() {
        let admin = admin().await;
        let first = place(&admin, "baby-portrait-classic").await;
        place(&admin, "couple-portrait-romantic").await;
        admin
            .set_order_status(&first.id, OrderStatus::Processing)
            .await
            .unwrap();

        let processing = admin.orders(Some(OrderStatus::Processing)).await.unwrap();
        assert_eq!(processing.len(), 1);
        assert_eq!(processing[0].id, first.id);
        assert_eq!(admin.orders(None).await.unwrap().len(), 2);
    }
}
