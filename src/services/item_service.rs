use rust_decimal::Decimal;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::db::{dao::ItemDao, entities::item};

use super::catalog_service::{CatalogInput, CatalogMessages, CatalogService};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub status: i32,
}

impl CatalogInput for ItemInput {
    fn name(&self) -> &str {
        &self.name
    }
}

/// `price` goes out as a JSON number, not the decimal's string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub status: i32,
}

impl From<item::Model> for ItemResponse {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            status: model.status,
        }
    }
}

#[derive(Clone)]
pub struct ItemService {
    dao: ItemDao,
}

impl ItemService {
    pub fn new(dao: ItemDao) -> Self {
        Self { dao }
    }
}

impl CatalogService for ItemService {
    type Dao = ItemDao;
    type Input = ItemInput;
    type Row = ItemResponse;

    fn dao(&self) -> &ItemDao {
        &self.dao
    }

    fn messages(&self) -> CatalogMessages {
        CatalogMessages {
            name_taken: "item name already exists",
            not_found: "item not found",
            not_found_or_deleted: "item not found or already deleted",
            created: "item created successfully",
            updated: "item updated successfully",
            deleted: "item deleted successfully",
        }
    }

    fn build_active(input: &ItemInput) -> item::ActiveModel {
        item::ActiveModel {
            name: Set(input.name.clone()),
            price: Set(input.price),
            status: Set(input.status),
            ..Default::default()
        }
    }
}
