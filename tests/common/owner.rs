use resourcecrate::{RelatedLink, ResourceModel};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::widget::Entity")]
    Widgets,
}

impl Related<super::widget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Widgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ResourceModel for Model {
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    const URL: &'static str = "/owners";

    fn model(&self) -> &Model {
        self
    }

    fn relationships(&self) -> Vec<RelatedLink> {
        vec![RelatedLink::collection("widgets_collection")]
    }
}
