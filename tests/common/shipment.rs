use resourcecrate::ResourceModel;
use sea_orm::entity::prelude::*;

// Composite primary key: order_id + item_id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shipments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ResourceModel for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    const URL: &'static str = "/shipments";

    fn model(&self) -> &Model {
        self
    }
}
