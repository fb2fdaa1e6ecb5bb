use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "tm_item")]
pub struct Model {
    pub name: String,
    pub price: Decimal,
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
