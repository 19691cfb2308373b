//! Order submission and the persisted order list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

use super::cart::{CartItem, CartService, CartTotals, DELIVERY_CHARGE};
use super::{non_blank, time_based_id, ServiceError};
use crate::catalog::{Artwork, Catalog, Category};
use crate::storage::{Collection, StoreError};

/// Charged when an order names neither a cart nor an artwork.
pub const DEFAULT_CUSTOM_PRICE: u32 = 1500;
pub const CUSTOM_ARTWORK_TITLE: &str = "Custom Artwork";
pub const DEFAULT_STATE: &str = "Tamil Nadu";
pub const DELIVERY_STATES: [&str; 4] = ["Tamil Nadu", "Kerala", "Karnataka", "Andhra Pradesh"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Processing" => Ok(Self::Processing),
            "Delivered" => Ok(Self::Delivered),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
        })
    }
}

fn one() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub price: u32,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        OrderItem {
            id: Some(item.id.clone()),
            title: item.title.clone(),
            price: item.price,
            quantity: item.quantity,
            category: Some(item.category),
            image: Some(item.image.clone()),
        }
    }
}

impl From<&Artwork> for OrderItem {
    fn from(artwork: &Artwork) -> Self {
        OrderItem {
            id: Some(artwork.id.clone()),
            title: artwork.title.clone(),
            price: artwork.price,
            quantity: 1,
            category: Some(artwork.category),
            image: Some(artwork.image.clone()),
        }
    }
}

impl OrderItem {
    fn custom() -> Self {
        OrderItem {
            id: None,
            title: CUSTOM_ARTWORK_TITLE.to_owned(),
            price: DEFAULT_CUSTOM_PRICE,
            quantity: 1,
            category: None,
            image: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub artwork_type: String,
    #[serde(default)]
    pub custom_requirements: Option<String>,
    /// File name only, the photo itself is never stored.
    #[serde(default)]
    pub reference_photo_name: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: u64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub email: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub pincode: String,
    pub artwork_type: Option<String>,
    pub custom_requirements: Option<String>,
    pub reference_photo_name: Option<String>,
}

impl OrderForm {
    fn normalized(self) -> Self {
        OrderForm {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: non_blank(self.state),
            pincode: self.pincode.trim().to_owned(),
            artwork_type: non_blank(self.artwork_type),
            custom_requirements: non_blank(self.custom_requirements),
            reference_photo_name: non_blank(self.reference_photo_name),
        }
    }
}

/// Where the order came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Checkout {
    /// Proceed to checkout from the cart.
    Cart,
    /// "Order now" on a single artwork.
    Artwork {
        #[serde(rename = "artworkId")]
        artwork_id: String,
    },
    /// Generic commission with no artwork context.
    #[default]
    Custom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub items: Vec<OrderItem>,
    pub total: u64,
}

/// Prices an order: a non-empty cart wins, then a selected artwork plus
/// delivery, then the flat custom price.
pub fn quote(cart: Option<&[CartItem]>, artwork: Option<&Artwork>) -> Quote {
    match (cart, artwork) {
        (Some(items), _) if !items.is_empty() => Quote {
            items: items.iter().map(OrderItem::from).collect(),
            total: CartTotals::of(items).total,
        },
        (_, Some(artwork)) => Quote {
            items: vec![OrderItem::from(artwork)],
            total: u64::from(artwork.price) + DELIVERY_CHARGE,
        },
        _ => Quote {
            items: vec![OrderItem::custom()],
            total: u64::from(DEFAULT_CUSTOM_PRICE),
        },
    }
}

pub struct OrderService {
    orders: Collection<Order>,
    catalog: Arc<Catalog>,
    cart: Arc<CartService>,
    write_lock: Mutex<()>,
}

impl OrderService {
    pub fn new(orders: Collection<Order>, catalog: Arc<Catalog>, cart: Arc<CartService>) -> Self {
        OrderService {
            orders,
            catalog,
            cart,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn submit(&self, form: OrderForm, checkout: Checkout) -> Result<Order, ServiceError> {
        let form = form.normalized();
        form.validate()?;

        let artwork = match &checkout {
            Checkout::Artwork { artwork_id } => Some(self.catalog.find(artwork_id).ok_or_else(|| {
                ServiceError::NotFound(format!("No artwork with {} id was found.", artwork_id))
            })?),
            _ => None,
        };
        // Held until the order is saved so no cart write slips in between.
        let cart_checkout = match checkout {
            Checkout::Cart => Some(self.cart.begin_checkout().await?),
            _ => None,
        };
        let Quote { items, total } = quote(cart_checkout.as_ref().map(|cart| cart.items()), artwork);

        let order = {
            let _guard = self.write_lock.lock().await;
            let mut orders = self.orders.load().await?;
            let now = Utc::now();

            let order = Order {
                id: time_based_id("ORDER", now, orders.iter().map(|order| order.id.as_str())),
                name: form.name,
                phone: form.phone,
                email: form.email,
                address: form.address,
                city: form.city,
                state: form.state.unwrap_or_else(|| DEFAULT_STATE.to_owned()),
                pincode: form.pincode,
                artwork_type: form
                    .artwork_type
                    .or_else(|| artwork.map(|artwork| artwork.title.clone()))
                    .unwrap_or_default(),
                custom_requirements: form.custom_requirements,
                reference_photo_name: form.reference_photo_name,
                items,
                total,
                status: OrderStatus::Pending,
                order_date: now,
            };

            orders.push(order.clone());
            self.orders.save(&orders).await?;
            order
        };

        if let Some(cart_checkout) = cart_checkout {
            cart_checkout.complete().await?;
        }

        info!(order_id = %order.id, total = order.total, "Order placed");
        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.orders.load().await
    }

    pub async fn set_status(&self, id: &str, status: OrderStatus) -> Result<Order, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.orders.load().await?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| missing_order(id))?;
        order.status = status;
        let updated = order.clone();

        self.orders.save(&orders).await?;
        info!(order_id = %id, status = %status, "Order status updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.orders.load().await?;
        let before = orders.len();
        orders.retain(|order| order.id != id);
        if orders.len() == before {
            return Err(missing_order(id));
        }

        self.orders.save(&orders).await?;
        info!(order_id = %id, "Order deleted");
        Ok(())
    }
}

fn missing_order(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("No order with {} id was found.", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KvStore, MemoryStore, CART_KEY, ORDERS_KEY};
    use std::time::Duration;

    struct Fixture {
        catalog: Arc<Catalog>,
        cart: Arc<CartService>,
        orders: OrderService,
    }

    async fn fixture() -> Fixture {
        fixture_on(Arc::new(MemoryStore::default())).await
    }

    async fn fixture_on(store: Arc<dyn KvStore>) -> Fixture {
        let catalog = Arc::new(Catalog::seeded());
        let cart = Arc::new(
            CartService::open(Collection::new(store.clone(), CART_KEY))
                .await
                .unwrap(),
        );
        let orders = OrderService::new(
            Collection::new(store, ORDERS_KEY),
            catalog.clone(),
            cart.clone(),
        );
        Fixture {
            catalog,
            cart,
            orders,
        }
    }

    fn form() -> OrderForm {
        OrderForm {
            name: "Anitha".into(),
            phone: "9876543210".into(),
            address: "12 Gandhi Street".into(),
            city: "Chennai".into(),
            ..Default::default()
        }
    }

    #[test]
    fn quote_prefers_cart_then_artwork_then_default() {
        let catalog = Catalog::seeded();
        let baby = catalog.find("baby-portrait-classic").unwrap();
        let single = catalog.find("single-portrait-professional").unwrap();
        let mut two_babies = CartItem::from(baby);
        two_babies.quantity = 2;
        let cart = vec![two_babies, CartItem::from(single)];

        let from_cart = quote(Some(cart.as_slice()), Some(baby));
        assert_eq!(from_cart.total, 2300);
        assert_eq!(from_cart.items.len(), 2);

        let direct = quote(None, Some(baby));
        assert_eq!(direct.total, 1000);
        assert_eq!(direct.items[0].title, "Baby Portrait");

        let empty_cart = quote(Some(&[][..]), None);
        assert_eq!(empty_cart.total, 1500);
        assert_eq!(empty_cart.items[0].title, CUSTOM_ARTWORK_TITLE);
    }

    #[tokio::test]
    async fn missing_required_fields_block_submission() {
        let fx = fixture().await;
        let err = fx
            .orders
            .submit(
                OrderForm {
                    name: "  ".into(),
                    address: String::new(),
                    ..form()
                },
                Checkout::Custom,
            )
            .await
            .unwrap_err();

        assert_eq!(err.invalid_fields(), vec!["address", "name"]);
        assert!(fx.orders.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cart_checkout_clears_the_cart() {
        let fx = fixture().await;
        let family = fx.catalog.find("family-portrait-premium").unwrap();
        fx.cart.add(family).await.unwrap();

        let order = fx.orders.submit(form(), Checkout::Cart).await.unwrap();

        assert_eq!(order.total, 1700);
        assert_eq!(order.items[0].id.as_deref(), Some("family-portrait-premium"));
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.id.starts_with("ORDER-"));
        assert!(fx.cart.items().await.unwrap().is_empty());
    }

    /// Order writes take a while, so other requests can interleave.
    #[derive(Default)]
    struct SlowOrderWrites {
        inner: MemoryStore,
    }

    #[async_trait::async_trait]
    impl KvStore for SlowOrderWrites {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
            if key == ORDERS_KEY {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }
    }

    #[tokio::test]
    async fn item_added_during_checkout_stays_in_cart() {
        let fx = fixture_on(Arc::new(SlowOrderWrites::default())).await;
        let baby = fx.catalog.find("baby-portrait-classic").unwrap();
        let nature = fx.catalog.find("wall-painting-nature").unwrap();
        fx.cart.add(baby).await.unwrap();

        let (order, added) = tokio::join!(fx.orders.submit(form(), Checkout::Cart), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            fx.cart.add(nature).await
        });
        let order = order.unwrap();
        added.unwrap();

        let ordered: Vec<_> = order.items.iter().map(|item| item.id.as_deref()).collect();
        assert_eq!(ordered, vec![Some("baby-portrait-classic")]);
        let left = fx.cart.items().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "wall-painting-nature");
        assert_eq!(fx.cart.totals().count, 1);
    }

    #[tokio::test]
    async fn direct_order_leaves_cart_alone() {
        let fx = fixture().await;
        let single = fx.catalog.find("single-portrait-professional").unwrap();
        fx.cart.add(single).await.unwrap();

        let order = fx
            .orders
            .submit(
                form(),
                Checkout::Artwork {
                    artwork_id: "couple-portrait-romantic".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(order.total, 1200);
        assert_eq!(order.artwork_type, "Couple Portrait");
        assert_eq!(order.state, DEFAULT_STATE);
        assert_eq!(fx.cart.items().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_artwork_is_not_found() {
        let fx = fixture().await;
        let result = fx
            .orders
            .submit(
                form(),
                Checkout::Artwork {
                    artwork_id: "marble-bust".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn back_to_back_orders_get_distinct_ids() {
        let fx = fixture().await;
        let first = fx.orders.submit(form(), Checkout::Custom).await.unwrap();
        let second = fx.orders.submit(form(), Checkout::Custom).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(fx.orders.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn status_and_delete_touch_only_their_order() {
        let fx = fixture().await;
        let keep = fx.orders.submit(form(), Checkout::Custom).await.unwrap();
        let gone = fx.orders.submit(form(), Checkout::Custom).await.unwrap();

        let updated = fx
            .orders
            .set_status(&keep.id, OrderStatus::Delivered)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);

        fx.orders.delete(&gone.id).await.unwrap();
        let left = fx.orders.list().await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, keep.id);
        assert!(matches!(
            fx.orders.delete(&gone.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn checkout_payloads_parse() {
        let cart: Checkout = serde_json::from_str(r#"{"kind":"cart"}"#).unwrap();
        assert_eq!(cart, Checkout::Cart);

        let artwork: Checkout =
            serde_json::from_str(r#"{"kind":"artwork","artworkId":"baby-portrait-classic"}"#).unwrap();
        assert_eq!(
            artwork,
            Checkout::Artwork {
                artwork_id: "baby-portrait-classic".into()
            }
        );
    }

    #[test]
    fn legacy_single_artwork_item_defaults_quantity() {
        let item: OrderItem = serde_json::from_str(
            r#"{"id":"baby-portrait-classic","title":"Baby Portrait","price":800,"category":"Baby","deliveryTime":"5-7 days"}"#,
        )
        .unwrap();
        assert_eq!(item.quantity, 1);
    }
}
