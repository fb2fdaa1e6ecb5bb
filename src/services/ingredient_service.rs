use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::db::{dao::IngredientDao, entities::ingredient};

use super::catalog_service::{CatalogInput, CatalogMessages, CatalogService};

/// Body of `POST /ingredients` and `PUT /ingredients/{uuid}`. Missing fields
/// take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IngredientInput {
    pub name: String,
    pub cause_alergy: bool,
    #[serde(rename = "type")]
    pub kind: i32,
    pub status: i32,
}

impl CatalogInput for IngredientInput {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    pub cause_alergy: bool,
    #[serde(rename = "type")]
    pub kind: i32,
    pub status: i32,
}

impl From<ingredient::Model> for IngredientResponse {
    fn from(model: ingredient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cause_alergy: model.causes_allergy,
            kind: model.kind,
            status: model.status,
        }
    }
}

#[derive(Clone)]
pub struct IngredientService {
    dao: IngredientDao,
}

impl IngredientService {
    pub fn new(dao: IngredientDao) -> Self {
        Self { dao }
    }
}

impl CatalogService for IngredientService {
    type Dao = IngredientDao;
    type Input = IngredientInput;
    type Row = IngredientResponse;

    fn dao(&self) -> &IngredientDao {
        &self.dao
    }

    fn messages(&self) -> CatalogMessages {
        CatalogMessages {
            name_taken: "ingredient name already exists",
            not_found: "ingredient not found",
            not_found_or_deleted: "ingredient not found or already deleted",
            created: "ingredient created successfully",
            updated: "ingredient updated successfully",
            deleted: "ingredient deleted successfully",
        }
    }

    fn build_active(input: &IngredientInput) -> ingredient::ActiveModel {
        ingredient::ActiveModel {
            name: Set(input.name.clone()),
            causes_allergy: Set(input.cause_alergy),
            kind: Set(input.kind),
            status: Set(input.status),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use super::{IngredientInput, IngredientService};
    use crate::db::dao::{IngredientDao, SoftDeleteDao};
    use crate::services::catalog_service::{CatalogService, NAME_REQUIRED};

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn input(name: &str) -> IngredientInput {
        IngredientInput {
            name: name.to_string(),
            cause_alergy: true,
            kind: 2,
            status: 1,
        }
    }

    fn service(db: &sea_orm::DatabaseConnection) -> IngredientService {
        IngredientService::new(IngredientDao::new(db))
    }

    #[tokio::test]
    async fn create_rejects_empty_name_without_touching_the_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let err = service(&db)
            .create(input(""))
            .await
            .expect_err("empty name should fail");
        assert_eq!(err.message(), NAME_REQUIRED);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn create_stores_padded_and_whitespace_names_as_sent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(0)], [count_row(0)]])
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();
        let service = service(&db);

        service
            .create(input("  Salt  "))
            .await
            .expect("padded name should be accepted");
        service
            .create(input(" "))
            .await
            .expect("whitespace name is not empty");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 4);
        let padded_count = format!("{:?}", log[0]);
        let padded_insert = format!("{:?}", log[1]);
        assert!(padded_count.contains(r#""  Salt  ""#));
        assert!(padded_insert.contains(r#""  Salt  ""#));
        assert!(format!("{:?}", log[3]).contains(r#"" ""#));
    }

    #[tokio::test]
    async fn create_reports_taken_name_without_inserting() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(1)]])
            .into_connection();

        let err = service(&db)
            .create(input("Salt"))
            .await
            .expect_err("duplicate should fail");
        assert_eq!(err.message(), "ingredient name already exists");
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn update_maps_missing_row_to_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = service(&db)
            .update("missing", input("Salt"))
            .await
            .expect_err("missing row should fail");
        assert_eq!(err.message(), "ingredient not found");
    }
}
