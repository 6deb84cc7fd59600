//! Generic CRUD handlers shared by every resource.
use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataResponse;
use models::Record;
use service::crud::CrudService;

use super::extract::{ApiJson, ApiPath};
use crate::errors::JsonApiError;

type ApiResult<T> = Result<Json<DataResponse<T>>, JsonApiError>;

pub async fn list<M: Record>(State(svc): State<Arc<CrudService<M>>>) -> ApiResult<Vec<M>> {
    Ok(Json(DataResponse::new(svc.find_all().await?)))
}

pub async fn get_one<M: Record>(State(svc): State<Arc<CrudService<M>>>, ApiPath(id): ApiPath<i32>) -> ApiResult<M> {
    Ok(Json(DataResponse::new(svc.find_by_id(id).await?)))
}

pub async fn create<M: Record>(
    State(svc): State<Arc<CrudService<M>>>,
    ApiJson(draft): ApiJson<M::Draft>,
) -> Result<(StatusCode, Json<DataResponse<M>>), JsonApiError> {
    let created = svc.create(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// `PUT` carries every attribute except the id, which comes from the path.
pub async fn replace<M: Record>(
    State(svc): State<Arc<CrudService<M>>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(draft): ApiJson<M::Draft>,
) -> ApiResult<M> {
    Ok(Json(DataResponse::new(svc.update(M::from_draft(id, draft)).await?)))
}

pub async fn patch<M: Record>(
    State(svc): State<Arc<CrudService<M>>>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(patch): ApiJson<M::Patch>,
) -> ApiResult<M> {
    Ok(Json(DataResponse::new(svc.partial_update(id, patch).await?)))
}

pub async fn remove<M: Record>(
    State(svc): State<Arc<CrudService<M>>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, JsonApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The six CRUD routes for `M`, usable under any state that yields its service.
pub fn routes<M, S>() -> Router<S>
where
    M: Record,
    S: Clone + Send + Sync + 'static,
    Arc<CrudService<M>>: FromRef<S>,
{
    Router::new()
        .route("/", get(list::<M>).post(create::<M>))
        .route("/:id", get(get_one::<M>).put(replace::<M>).patch(patch::<M>).delete(remove::<M>))
}

pub fn router<M: Record>(svc: Arc<CrudService<M>>) -> Router {
    routes::<M, Arc<CrudService<M>>>().with_state(svc)
}
