use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        ingredient_service::IngredientService, item_ingredient_service::ItemIngredientService,
        item_service::ItemService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn ingredient(&self) -> IngredientService {
        IngredientService::new(self.daos.ingredient())
    }

    pub fn item(&self) -> ItemService {
        ItemService::new(self.daos.item())
    }

    pub fn item_ingredient(&self) -> ItemIngredientService {
        ItemIngredientService::new(self.daos.item_ingredient())
    }
}
