use sea_orm::DatabaseConnection;

use super::SoftDeleteDao;
use crate::db::entities::ingredient;
use crate::db::entities::prelude::Ingredient;

#[derive(Clone)]
pub struct IngredientDao {
    db: DatabaseConnection,
}

impl SoftDeleteDao for IngredientDao {
    type Entity = Ingredient;
    type Model = ingredient::Model;
    type ActiveModel = ingredient::ActiveModel;

    const ENTITY: &'static str = "ingredient";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
