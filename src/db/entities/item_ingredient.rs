use sea_orm::entity::prelude::*;

/// Join row linking an item to one of its ingredients. Not soft-deletable.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "tm_item_ingredient")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid_item: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid_ingredient: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
