use base_entity_derive::base_entity;
use sea_orm::entity::prelude::*;

#[base_entity]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "tm_ingredient")]
pub struct Model {
    pub name: String,
    #[sea_orm(column_name = "cause_alergy")]
    pub causes_allergy: bool,
    #[sea_orm(column_name = "type")]
    pub kind: i32,
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
