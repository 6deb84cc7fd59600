use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use common::types::DataResponse;
use models::reports::{
    CarriersByLocality, InboundOrdersByEmployee, ProductsBySection, PurchaseOrdersByBuyer, RecordsByProduct,
    SellersByLocality,
};
use serde::Deserialize;
use service::reports::ReportService;

use super::extract::ApiQuery;
use crate::errors::JsonApiError;

/// `?id=` narrows a report to one parent row.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub id: Option<i32>,
}

type ReportResult<T> = Result<Json<DataResponse<Vec<T>>>, JsonApiError>;

pub async fn purchase_orders_by_buyer(
    State(svc): State<Arc<ReportService>>,
    ApiQuery(q): ApiQuery<ReportQuery>,
) -> ReportResult<PurchaseOrdersByBuyer> {
    Ok(Json(DataResponse::new(svc.purchase_orders_by_buyer(q.id).await?)))
}

pub async fn inbound_orders_by_employee(
    State(svc): State<Arc<ReportService>>,
    ApiQuery(q): ApiQuery<ReportQuery>,
) -> ReportResult<InboundOrdersByEmployee> {
    Ok(Json(DataResponse::new(svc.inbound_orders_by_employee(q.id).await?)))
}

pub async fn products_by_section(
    State(svc): State<Arc<ReportService>>,
    ApiQuery(q): ApiQuery<ReportQuery>,
) -> ReportResult<ProductsBySection> {
    Ok(Json(DataResponse::new(svc.products_by_section(q.id).await?)))
}

pub async fn records_by_product(
    State(svc): State<Arc<ReportService>>,
    ApiQuery(q): ApiQuery<ReportQuery>,
) -> ReportResult<RecordsByProduct> {
    Ok(Json(DataResponse::new(svc.records_by_product(q.id).await?)))
}

pub async fn sellers_by_locality(
    State(svc): State<Arc<ReportService>>,
    ApiQuery(q): ApiQuery<ReportQuery>,
) -> ReportResult<SellersByLocality> {
    Ok(Json(DataResponse::new(svc.sellers_by_locality(q.id).await?)))
}

pub async fn carriers_by_locality(
    State(svc): State<Arc<ReportService>>,
    ApiQuery(q): ApiQuery<ReportQuery>,
) -> ReportResult<CarriersByLocality> {
    Ok(Json(DataResponse::new(svc.carriers_by_locality(q.id).await?)))
}

pub fn buyers(svc: Arc<ReportService>) -> Router {
    Router::new().route("/reportPurchaseOrders", get(purchase_orders_by_buyer)).with_state(svc)
}

pub fn employees(svc: Arc<ReportService>) -> Router {
    Router::new().route("/reportInboundOrders", get(inbound_orders_by_employee)).with_state(svc)
}

pub fn sections(svc: Arc<ReportService>) -> Router {
    Router::new().route("/reportProducts", get(products_by_section)).with_state(svc)
}

pub fn products(svc: Arc<ReportService>) -> Router {
    Router::new().route("/reportRecords", get(records_by_product)).with_state(svc)
}

pub fn localities(svc: Arc<ReportService>) -> Router {
    Router::new()
        .route("/reportSellers", get(sellers_by_locality))
        .route("/reportCarriers", get(carriers_by_locality))
        .with_state(svc)
}
