use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::DaoResult;
use crate::db::entities::item_ingredient;
use crate::db::entities::prelude::ItemIngredient;

/// Hard deletes on the item/ingredient join table.
#[derive(Clone)]
pub struct ItemIngredientDao {
    db: DatabaseConnection,
}

impl ItemIngredientDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Removes every link between the pair and returns how many rows went.
    pub async fn delete_link(&self, uuid_item: &str, uuid_ingredient: &str) -> DaoResult<u64> {
        let result = ItemIngredient::delete_many()
            .filter(item_ingredient::Column::UuidItem.eq(uuid_item))
            .filter(item_ingredient::Column::UuidIngredient.eq(uuid_ingredient))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
