use serde::{Serialize, de::DeserializeOwned};

use crate::{
    db::dao::{DaoLayerError, SoftDeleteDao},
    error::AppError,
    pagination::PageParams,
    response::ListResponse,
};

pub const NAME_REQUIRED: &str = "name is required";

/// Request body shared by create and update.
pub trait CatalogInput: DeserializeOwned + Send + Sync + 'static {
    fn name(&self) -> &str;

    /// Only an empty name is rejected; whitespace is stored as sent.
    fn validate(&self) -> Result<(), AppError> {
        if self.name().is_empty() {
            return Err(AppError::bad_request(NAME_REQUIRED));
        }
        Ok(())
    }
}

/// User-facing texts for one catalog table.
#[derive(Debug, Clone, Copy)]
pub struct CatalogMessages {
    pub name_taken: &'static str,
    pub not_found: &'static str,
    pub not_found_or_deleted: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

type ModelOf<S> = <<S as CatalogService>::Dao as SoftDeleteDao>::Model;
type ActiveModelOf<S> = <<S as CatalogService>::Dao as SoftDeleteDao>::ActiveModel;

/// List, create, update and soft delete for a table keyed by a unique name.
#[async_trait::async_trait]
pub trait CatalogService: Clone + Send + Sync + 'static {
    type Dao: SoftDeleteDao;
    type Input: CatalogInput;
    type Row: Serialize + From<ModelOf<Self>> + Send;

    fn dao(&self) -> &Self::Dao;

    fn messages(&self) -> CatalogMessages;

    /// Mutable columns for both insert and update.
    fn build_active(input: &Self::Input) -> ActiveModelOf<Self>;

    fn map_write_error(&self, err: DaoLayerError) -> AppError {
        match err {
            DaoLayerError::UniqueViolation(_) => AppError::conflict(self.messages().name_taken),
            other => AppError::from(other),
        }
    }

    #[tracing::instrument(skip(self), fields(entity = <Self::Dao as SoftDeleteDao>::ENTITY))]
    async fn list(&self, params: PageParams) -> Result<ListResponse<Self::Row>, AppError> {
        let rows = self.dao().find_page(params.window()).await?;
        let total = self.dao().count_active().await?;
        Ok(ListResponse {
            data: rows.into_iter().map(Self::Row::from).collect(),
            meta: params.meta(total),
        })
    }

    #[tracing::instrument(skip_all, fields(entity = <Self::Dao as SoftDeleteDao>::ENTITY))]
    async fn create(&self, input: Self::Input) -> Result<String, AppError> {
        input.validate()?;
        if self.dao().name_taken(input.name(), None).await? {
            return Err(AppError::conflict(self.messages().name_taken));
        }

        let active = Self::build_active(&input);

        let id = self
            .dao()
            .insert(active)
            .await
            .map_err(|err| self.map_write_error(err))?;
        tracing::info!(%id, "created");
        Ok(id)
    }

    #[tracing::instrument(skip(self, input), fields(entity = <Self::Dao as SoftDeleteDao>::ENTITY))]
    async fn update(&self, id: &str, input: Self::Input) -> Result<(), AppError> {
        input.validate()?;
        if self.dao().name_taken(input.name(), Some(id)).await? {
            return Err(AppError::conflict(self.messages().name_taken));
        }

        let active = Self::build_active(&input);

        match self.dao().update_fields(id, active).await {
            Ok(()) => Ok(()),
            Err(DaoLayerError::NotFound { .. }) => {
                Err(AppError::not_found(self.messages().not_found))
            }
            Err(err) => Err(self.map_write_error(err)),
        }
    }

    #[tracing::instrument(skip(self), fields(entity = <Self::Dao as SoftDeleteDao>::ENTITY))]
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        match self.dao().soft_delete(id).await {
            Ok(()) => Ok(()),
            Err(DaoLayerError::NotFound { .. }) => {
                Err(AppError::not_found(self.messages().not_found_or_deleted))
            }
            Err(err) => Err(err.into()),
        }
    }
}
