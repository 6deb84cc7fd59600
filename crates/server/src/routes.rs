use axum::{routing::get, Json, Router};
use common::types::Health;
use service::Services;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod crud;
pub mod extract;
pub mod purchase_orders;
pub mod reports;

use purchase_orders::PurchaseOrderState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Every resource under `/api/v1`, one nested router per collection.
pub fn api_router(s: &Services) -> Router {
    let orders = PurchaseOrderState { orders: s.purchase_orders.clone(), details: s.purchase_order_details.clone() };

    Router::new()
        .nest("/buyers", crud::router(s.buyers.clone()).merge(reports::buyers(s.reports.clone())))
        .nest("/sellers", crud::router(s.sellers.clone()))
        .nest("/employees", crud::router(s.employees.clone()).merge(reports::employees(s.reports.clone())))
        .nest("/warehouses", crud::router(s.warehouses.clone()))
        .nest("/sections", crud::router(s.sections.clone()).merge(reports::sections(s.reports.clone())))
        .nest("/productTypes", crud::router(s.product_types.clone()))
        .nest("/products", crud::router(s.products.clone()).merge(reports::products(s.reports.clone())))
        .nest("/productBatches", crud::router(s.product_batches.clone()))
        .nest("/productRecords", crud::router(s.product_records.clone()))
        .nest("/inboundOrders", crud::router(s.inbound_orders.clone()))
        .nest("/purchaseOrders", purchase_orders::router(orders))
        .nest("/orderDetails", crud::router(s.order_details.clone()))
        .nest("/localities", crud::router(s.localities.clone()).merge(reports::localities(s.reports.clone())))
        .nest("/carriers", crud::router(s.carriers.clone()))
}

/// Build the full application router: health check, the versioned API, CORS and request tracing.
pub fn build_router(services: Services, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_router(&services))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        // status code and latency
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use service::{storage::MemoryDatabase, Repositories};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let services = Services::from(Repositories::memory(Arc::new(MemoryDatabase::new())));
        build_router(services, CorsLayer::very_permissive())
    }

    #[tokio::test]
    async fn health_reports_ok() -> anyhow::Result<()> {
        let res = app().oneshot(Request::get("/health").body(Body::empty())?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await?;
        assert_eq!(serde_json::from_slice::<serde_json::Value>(&body)?, serde_json::json!({"status": "ok"}));
        Ok(())
    }

    #[tokio::test]
    async fn empty_collection_lists_as_empty_array() -> anyhow::Result<()> {
        let res = app().oneshot(Request::get("/api/v1/warehouses").body(Body::empty())?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await?;
        assert_eq!(serde_json::from_slice::<serde_json::Value>(&body)?, serde_json::json!({"data": []}));
        Ok(())
    }

    #[tokio::test]
    async fn report_path_is_not_taken_for_an_id() -> anyhow::Result<()> {
        let res = app().oneshot(Request::get("/api/v1/localities/reportSellers").body(Body::empty())?).await?;
        assert_eq!(res.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn missing_row_is_404_with_error_body() -> anyhow::Result<()> {
        let res = app().oneshot(Request::delete("/api/v1/warehouses/999").body(Body::empty())?).await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(&to_bytes(res.into_body(), usize::MAX).await?)?;
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "warehouse 999 not found");
        Ok(())
    }

    #[tokio::test]
    async fn mistyped_patch_body_is_422_with_error_body() -> anyhow::Result<()> {
        let req = Request::patch("/api/v1/buyers/1")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"first_name": 7}"#))?;
        let res = app().oneshot(req).await?;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = serde_json::from_slice(&to_bytes(res.into_body(), usize::MAX).await?)?;
        assert_eq!(body["error"], "Unprocessable Entity");
        assert!(body["message"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_id_is_400_with_error_body() -> anyhow::Result<()> {
        let res = app().oneshot(Request::get("/api/v1/warehouses/abc").body(Body::empty())?).await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(&to_bytes(res.into_body(), usize::MAX).await?)?;
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"].is_string());
        Ok(())
    }
}
