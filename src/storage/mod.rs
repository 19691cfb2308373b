//! Key-value persistence for the storefront collections.
//!
//! Every collection is stored as one JSON document under a fixed key, the
//! same layout the browser storefront used (`cartItems`, `orders`,
//! `contactMessages`, `adminSession`). [`KvStore`] is the storage seam;
//! [`Collection`] and [`Flag`] add typed access on top of it.

pub mod db;
pub mod memory;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::{marker::PhantomData, sync::Arc};
use thiserror::Error;

pub use db::DbStore;
pub use memory::MemoryStore;

pub const CART_KEY: &str = "cartItems";
pub const ORDERS_KEY: &str = "orders";
pub const MESSAGES_KEY: &str = "contactMessages";
pub const ADMIN_SESSION_KEY: &str = "adminSession";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("Malformed value under `{key}`: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode value for `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string storage keyed by name.
///
/// Writes replace the whole value. There is no compare-and-swap, callers
/// that read-modify-write must serialize themselves.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// A JSON array of `T` kept under one key. A missing key reads as empty.
pub struct Collection<T> {
    store: Arc<dyn KvStore>,
    key: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key,
            _item: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Sync,
{
    pub fn new(store: Arc<dyn KvStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _item: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        match self.store.get(self.key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
                key: self.key,
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub async fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(|source| StoreError::Encode {
            key: self.key,
            source,
        })?;
        self.store.set(self.key, raw).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(self.key).await
    }
}

/// A boolean kept as the string `"true"`, cleared by removing the key.
#[derive(Clone)]
pub struct Flag {
    store: Arc<dyn KvStore>,
    key: &'static str,
}

impl Flag {
    pub fn new(store: Arc<dyn KvStore>, key: &'static str) -> Self {
        Self { store, key }
    }

    pub async fn is_set(&self) -> Result<bool, StoreError> {
        Ok(matches!(self.store.get(self.key).await?.as_deref(), Some("true")))
    }

    pub async fn set(&self) -> Result<(), StoreError> {
        self.store.set(self.key, "true".to_owned()).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(self.key).await
    }
}
