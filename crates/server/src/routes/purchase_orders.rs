//! Purchase orders: the generic member routes plus creation with details.
use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use common::types::DataResponse;
use models::{order_detail, purchase_order};
use service::{crud::PurchaseOrderCrudService, purchase_order::PurchaseOrderService};

use super::{
    crud,
    extract::{ApiJson, ApiPath},
};
use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct PurchaseOrderState {
    pub orders: Arc<PurchaseOrderCrudService>,
    pub details: Arc<PurchaseOrderService>,
}

impl FromRef<PurchaseOrderState> for Arc<PurchaseOrderCrudService> {
    fn from_ref(state: &PurchaseOrderState) -> Self {
        state.orders.clone()
    }
}

impl FromRef<PurchaseOrderState> for Arc<PurchaseOrderService> {
    fn from_ref(state: &PurchaseOrderState) -> Self {
        state.details.clone()
    }
}

/// Creates the order and its optional `order_details` in one unit of work.
pub async fn create_with_details(
    State(svc): State<Arc<PurchaseOrderService>>,
    ApiJson(draft): ApiJson<purchase_order::DraftWithDetails>,
) -> Result<(StatusCode, Json<DataResponse<purchase_order::WithDetails>>), JsonApiError> {
    let created = svc.create_with_details(draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

pub async fn order_details(
    State(svc): State<Arc<PurchaseOrderService>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<DataResponse<Vec<order_detail::Model>>>, JsonApiError> {
    Ok(Json(DataResponse::new(svc.find_details(id).await?)))
}

pub fn router(state: PurchaseOrderState) -> Router {
    type M = purchase_order::Model;
    Router::new()
        .route("/", get(crud::list::<M>).post(create_with_details))
        .route(
            "/:id",
            get(crud::get_one::<M>).put(crud::replace::<M>).patch(crud::patch::<M>).delete(crud::remove::<M>),
        )
        .route("/:id/orderDetails", get(order_details))
        .with_state(state)
}
