pub mod kv_entry;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entities::kv_entry::Entity as KvEntry;

pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create_kv_table = schema.create_table_from_entity(KvEntry);
    create_kv_table.if_not_exists();

    db.execute(backend.build(&create_kv_table)).await?;
    Ok(())
}
