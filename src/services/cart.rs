//! The single shopping cart.
//!
//! Lines are keyed by artwork id. Every mutation writes the whole list back
//! and publishes the new [`CartTotals`] to subscribers, which is how a cart
//! badge stays current without polling.

use serde::{Deserialize, Serialize};
use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::debug;

use super::ServiceError;
use crate::catalog::{Artwork, Category};
use crate::storage::{Collection, StoreError};

/// Flat delivery surcharge, charged once on any non-empty order.
pub const DELIVERY_CHARGE: u64 = 200;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub image: String,
    pub quantity: u32,
    pub category: Category,
}

impl From<&Artwork> for CartItem {
    fn from(artwork: &Artwork) -> Self {
        CartItem {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            price: artwork.price,
            image: artwork.image.clone(),
            quantity: 1,
            category: artwork.category,
        }
    }
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: u64,
    pub delivery: u64,
    pub total: u64,
    /// Sum of quantities, what the header badge shows.
    pub count: u64,
}

impl CartTotals {
    pub fn of(items: &[CartItem]) -> Self {
        let subtotal: u64 = items.iter().map(CartItem::line_total).sum();
        let delivery = if subtotal > 0 { DELIVERY_CHARGE } else { 0 };
        CartTotals {
            subtotal,
            delivery,
            total: subtotal + delivery,
            count: items.iter().map(|item| u64::from(item.quantity)).sum(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    #[serde(flatten)]
    pub totals: CartTotals,
}

impl CartView {
    fn new(items: Vec<CartItem>) -> Self {
        let totals = CartTotals::of(&items);
        CartView { items, totals }
    }
}

pub struct CartService {
    items: Collection<CartItem>,
    write_lock: Mutex<()>,
    changes: watch::Sender<CartTotals>,
}

impl CartService {
    pub async fn open(items: Collection<CartItem>) -> Result<Self, StoreError> {
        let current = CartTotals::of(&items.load().await?);
        let (changes, _) = watch::channel(current);
        Ok(CartService {
            items,
            write_lock: Mutex::new(()),
            changes,
        })
    }

    /// Receiver that always holds the latest totals.
    pub fn subscribe(&self) -> watch::Receiver<CartTotals> {
        self.changes.subscribe()
    }

    pub fn totals(&self) -> CartTotals {
        *self.changes.borrow()
    }

    pub async fn items(&self) -> Result<Vec<CartItem>, StoreError> {
        self.items.load().await
    }

    pub async fn view(&self) -> Result<CartView, StoreError> {
        Ok(CartView::new(self.items.load().await?))
    }

    pub async fn add(&self, artwork: &Artwork) -> Result<CartView, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.items.load().await?;

        match items.iter_mut().find(|item| item.id == artwork.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => items.push(CartItem::from(artwork)),
        }

        debug!(artwork_id = %artwork.id, "Added artwork to cart");
        self.commit(items).await
    }

    /// Overwrites a line's quantity. Zero or below removes the line.
    pub async fn set_quantity(&self, id: &str, quantity: i64) -> Result<CartView, ServiceError> {
        if quantity <= 0 {
            return self.remove(id).await;
        }

        let _guard = self.write_lock.lock().await;
        let mut items = self.items.load().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| missing_line(id))?;
        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        Ok(self.commit(items).await?)
    }

    pub async fn remove(&self, id: &str) -> Result<CartView, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.items.load().await?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(missing_line(id));
        }

        Ok(self.commit(items).await?)
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.empty().await
    }

    /// Locks the cart for checkout and returns its current lines.
    ///
    /// No other cart write can land until the returned [`CartCheckout`] is
    /// completed or dropped. Dropping it leaves the cart as it was.
    pub async fn begin_checkout(&self) -> Result<CartCheckout<'_>, StoreError> {
        let guard = self.write_lock.lock().await;
        let items = self.items.load().await?;
        Ok(CartCheckout {
            cart: self,
            items,
            _guard: guard,
        })
    }

    async fn empty(&self) -> Result<(), StoreError> {
        self.items.clear().await?;
        self.changes.send_replace(CartTotals::default());
        Ok(())
    }

    async fn commit(&self, items: Vec<CartItem>) -> Result<CartView, StoreError> {
        self.items.save(&items).await?;
        let view = CartView::new(items);
        self.changes.send_replace(view.totals);
        Ok(view)
    }
}

pub struct CartCheckout<'a> {
    cart: &'a CartService,
    items: Vec<CartItem>,
    _guard: MutexGuard<'a, ()>,
}

impl CartCheckout<'_> {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Empties the cart, then releases the lock.
    pub async fn complete(self) -> Result<(), StoreError> {
        self.cart.empty().await
    }
}

fn missing_line(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("No cart entry with {} id was found.", id))
}
