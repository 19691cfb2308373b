use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;

use super::{KvStore, StoreError};
use crate::entities::kv_entry::{self, Entity as KvEntry};

/// [`KvStore`] backed by the `kv_entry` table.
#[derive(Clone, Debug)]
pub struct DbStore {
    db: Arc<DatabaseConnection>,
}

impl DbStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KvStore for DbStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entry = KvEntry::find_by_id(key.to_owned()).one(&*self.db).await?;
        Ok(entry.map(|entry| entry.value))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let txn = self.db.begin().await?;

        match KvEntry::find_by_id(key.to_owned()).one(&txn).await? {
            Some(entry) => {
                let mut entry: kv_entry::ActiveModel = entry.into();
                entry.value = Set(value);
                entry.updated_at = Set(Utc::now());
                entry.update(&txn).await?;
            }
            None => {
                let entry = kv_entry::ActiveModel {
                    key: Set(key.to_owned()),
                    value: Set(value),
                    updated_at: Set(Utc::now()),
                };
                KvEntry::insert(entry).exec_without_returning(&txn).await?;
            }
        }

        txn.commit().await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        KvEntry::delete_by_id(key.to_owned())
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
