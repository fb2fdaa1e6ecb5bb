use axum::{
    Json, Router,
    extract::{Path, Query, rejection::JsonRejection, rejection::QueryRejection},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    error::AppError,
    pagination::ListQuery,
    response::ApiResponse,
    services::catalog_service::CatalogService,
};

pub const INVALID_BODY: &str = "invalid request body";
pub const UUID_REQUIRED: &str = "uuid is required";

/// Mounts list/create on `base_path` and update/delete on `base_path/{uuid}`
/// for one catalog service.
#[derive(Clone)]
pub struct CatalogRouter<S> {
    service: S,
    base_path: &'static str,
}

impl<S> CatalogRouter<S>
where
    S: CatalogService,
{
    pub fn new(service: S, base_path: &'static str) -> Self {
        Self { service, base_path }
    }

    pub fn router<St>(&self) -> Router<St>
    where
        St: Clone + Send + Sync + 'static,
    {
        let messages = self.service.messages();
        let item_path = format!("{}/{{uuid}}", self.base_path);

        Router::<St>::new()
            .route(
                self.base_path,
                get({
                    let service = self.service.clone();
                    move |query: Result<Query<ListQuery>, QueryRejection>| async move {
                        let params = query.map(|Query(q)| q).unwrap_or_default().resolve();
                        let list = service.list(params).await?;
                        ApiResponse::ok(list)
                    }
                })
                .post({
                    let service = self.service.clone();
                    move |payload: Result<Json<S::Input>, JsonRejection>| async move {
                        let Json(input) = payload.map_err(|_| AppError::bad_request(INVALID_BODY))?;
                        service.create(input).await?;
                        ApiResponse::message(StatusCode::CREATED, messages.created)
                    }
                }),
            )
            .route(
                &item_path,
                put({
                    let service = self.service.clone();
                    move |Path(uuid): Path<String>,
                          payload: Result<Json<S::Input>, JsonRejection>| async move {
                        let uuid = required_uuid(&uuid)?;
                        let Json(input) = payload.map_err(|_| AppError::bad_request(INVALID_BODY))?;
                        service.update(uuid, input).await?;
                        ApiResponse::message(StatusCode::OK, messages.updated)
                    }
                })
                .delete({
                    let service = self.service.clone();
                    move |Path(uuid): Path<String>| async move {
                        let uuid = required_uuid(&uuid)?;
                        service.delete(uuid).await?;
                        ApiResponse::message(StatusCode::OK, messages.deleted)
                    }
                }),
            )
    }
}

pub(crate) fn required_uuid(raw: &str) -> Result<&str, AppError> {
    if raw.is_empty() {
        return Err(AppError::bad_request(UUID_REQUIRED));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::{UUID_REQUIRED, required_uuid};

    #[test]
    fn only_an_empty_uuid_is_rejected() {
        let err = required_uuid("").expect_err("empty uuid should fail");
        assert_eq!(err.message(), UUID_REQUIRED);
        assert_eq!(required_uuid(" abc ").expect("padded uuid passes"), " abc ");
    }
}
