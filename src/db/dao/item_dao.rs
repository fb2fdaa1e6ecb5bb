use sea_orm::DatabaseConnection;

use super::SoftDeleteDao;
use crate::db::entities::item;
use crate::db::entities::prelude::Item;

#[derive(Clone)]
pub struct ItemDao {
    db: DatabaseConnection,
}

impl SoftDeleteDao for ItemDao {
    type Entity = Item;
    type Model = item::Model;
    type ActiveModel = item::ActiveModel;

    const ENTITY: &'static str = "item";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
