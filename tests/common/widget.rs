use resourcecrate::{RelatedLink, ResourceModel};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "widgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub serial: Uuid,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ResourceModel for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    const URL: &'static str = "/widgets";

    fn model(&self) -> &Model {
        self
    }
}

/// Widget together with whatever related owner the caller has loaded,
/// for link generation.
pub struct WidgetResource {
    pub widget: Model,
    pub owner: Option<super::owner::Model>,
}

impl ResourceModel for WidgetResource {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    const URL: &'static str = "/widgets";

    fn model(&self) -> &Model {
        &self.widget
    }

    fn relationships(&self) -> Vec<RelatedLink> {
        vec![
            RelatedLink::single(
                "owner",
                self.owner.as_ref().map(ResourceModel::resource_uri),
            ),
            RelatedLink::collection("parts_collection"),
        ]
    }
}
