use sea_orm::DatabaseConnection;

pub mod base;
pub mod base_traits;
pub mod error;
pub mod ingredient_dao;
pub mod item_dao;
pub mod item_ingredient_dao;

pub use base::{PageWindow, SoftDeleteDao};
pub use base_traits::{HasIdActiveModel, SoftDeleteEntity, TimestampedActiveModel};
pub use error::{DaoLayerError, DaoResult};
pub use ingredient_dao::IngredientDao;
pub use item_dao::ItemDao;
pub use item_ingredient_dao::ItemIngredientDao;

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn ingredient(&self) -> IngredientDao {
        IngredientDao::new(&self.db)
    }

    pub fn item(&self) -> ItemDao {
        ItemDao::new(&self.db)
    }

    pub fn item_ingredient(&self) -> ItemIngredientDao {
        ItemIngredientDao::new(&self.db)
    }
}
