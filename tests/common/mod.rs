#![allow(dead_code)]

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

pub mod owner;
pub mod shipment;
pub mod widget;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(owner::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(widget::Entity)))
        .await?;
    db.execute(backend.build(&schema.create_table_from_entity(shipment::Entity)))
        .await?;

    Ok(db)
}
