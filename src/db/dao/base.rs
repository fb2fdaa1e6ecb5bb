use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, sea_query::Expr,
};
use uuid::Uuid;

use super::base_traits::{HasIdActiveModel, SoftDeleteEntity, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

/// Rows to skip and rows to return for one list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

/// Shared persistence for soft-deletable catalog tables: every read and
/// every write ignores rows whose `deleted_at` is set.
#[async_trait::async_trait]
pub trait SoftDeleteDao: Clone + Send + Sync + Sized {
    type Entity: SoftDeleteEntity<Model = Self::Model, ActiveModel = Self::ActiveModel>
        + Send
        + Sync;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + HasIdActiveModel
        + TimestampedActiveModel
        + Send
        + Sync
        + 'static;

    /// Label used in not-found errors and logs.
    const ENTITY: &'static str;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    /// Newest identifiers first, as the listing endpoints expect.
    async fn find_page(&self, window: PageWindow) -> DaoResult<Vec<Self::Model>> {
        let rows = Self::Entity::find_active()
            .order_by_desc(Self::Entity::id_column())
            .limit(window.limit)
            .offset(window.offset)
            .all(self.db())
            .await?;
        Ok(rows)
    }

    async fn count_active(&self) -> DaoResult<u64> {
        let total = Self::Entity::find_active().count(self.db()).await?;
        Ok(total)
    }

    /// Whether another live row already uses `name`. `exclude_id` skips the
    /// row being updated.
    async fn name_taken(&self, name: &str, exclude_id: Option<&str>) -> DaoResult<bool> {
        let mut query = Self::Entity::find_active().filter(Self::Entity::name_column().eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(Self::Entity::id_column().ne(id));
        }
        let count = query.count(self.db()).await?;
        Ok(count > 0)
    }

    /// Inserts a new row under a freshly generated identifier and returns it.
    async fn insert(&self, data: Self::ActiveModel) -> DaoResult<String> {
        let id = Uuid::new_v4().to_string();
        let mut active = data;
        active.set_id(id.clone());
        active.set_created_at(Utc::now().fixed_offset());

        Self::Entity::insert(active)
            .exec_without_returning(self.db())
            .await?;
        Ok(id)
    }

    /// Writes every `Set` column of `changes` to the live row `id`.
    async fn update_fields(&self, id: &str, changes: Self::ActiveModel) -> DaoResult<()> {
        let mut active = changes;
        active.set_updated_at(Utc::now().fixed_offset());

        let result = Self::Entity::update_active()
            .set(active)
            .filter(Self::Entity::id_column().eq(id))
            .exec(self.db())
            .await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: Self::ENTITY,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn soft_delete(&self, id: &str) -> DaoResult<()> {
        let result = Self::Entity::update_active()
            .col_expr(
                Self::Entity::deleted_at_column(),
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(Self::Entity::id_column().eq(id))
            .exec(self.db())
            .await?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: Self::ENTITY,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
