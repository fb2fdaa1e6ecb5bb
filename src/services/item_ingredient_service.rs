use serde::Deserialize;

use crate::{db::dao::ItemIngredientDao, error::AppError};

pub const UUID_REQUIRED: &str = "uuid is required";
pub const LINK_NOT_FOUND: &str = "item or ingredient not found";
pub const LINK_DELETED: &str = "item ingredient deleted successfully";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemIngredientInput {
    pub uuid_item: String,
    pub uuid_ingredient: String,
}

#[derive(Clone)]
pub struct ItemIngredientService {
    dao: ItemIngredientDao,
}

impl ItemIngredientService {
    pub fn new(dao: ItemIngredientDao) -> Self {
        Self { dao }
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, input: ItemIngredientInput) -> Result<(), AppError> {
        if input.uuid_item.is_empty() || input.uuid_ingredient.is_empty() {
            return Err(AppError::bad_request(UUID_REQUIRED));
        }

        let removed = self
            .dao
            .delete_link(&input.uuid_item, &input.uuid_ingredient)
            .await?;
        if removed == 0 {
            return Err(AppError::not_found(LINK_NOT_FOUND));
        }
        tracing::info!(removed, "item ingredient links deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::{ItemIngredientInput, ItemIngredientService, LINK_NOT_FOUND, UUID_REQUIRED};
    use crate::db::dao::ItemIngredientDao;

    fn service(rows_affected: Option<u64>) -> ItemIngredientService {
        let mut mock = MockDatabase::new(DatabaseBackend::Postgres);
        if let Some(rows_affected) = rows_affected {
            mock = mock.append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected,
            }]);
        }
        ItemIngredientService::new(ItemIngredientDao::new(&mock.into_connection()))
    }

    fn input(item: &str, ingredient: &str) -> ItemIngredientInput {
        ItemIngredientInput {
            uuid_item: item.to_string(),
            uuid_ingredient: ingredient.to_string(),
        }
    }

    #[tokio::test]
    async fn both_identifiers_are_required() {
        let err = service(None)
            .delete(input("item-1", ""))
            .await
            .expect_err("missing ingredient should fail");
        assert_eq!(err.message(), UUID_REQUIRED);
    }

    #[tokio::test]
    async fn whitespace_identifiers_are_not_treated_as_missing() {
        let err = service(Some(0))
            .delete(input(" ", "ingredient-1"))
            .await
            .expect_err("no rows should be not found");
        assert_eq!(err.message(), LINK_NOT_FOUND);
    }

    #[tokio::test]
    async fn unmatched_pair_is_not_found() {
        let err = service(Some(0))
            .delete(input("item-1", "ingredient-1"))
            .await
            .expect_err("no rows should be not found");
        assert_eq!(err.message(), LINK_NOT_FOUND);
    }

    #[tokio::test]
    async fn matched_pair_is_removed() {
        service(Some(1))
            .delete(input("item-1", "ingredient-1"))
            .await
            .expect("delete should succeed");
    }
}
