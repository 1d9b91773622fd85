use crate::api::handlers;
use crate::config::ExportConfig;
use crate::db::InvoiceStore;
use crate::service::{ExportService, IngestService, QueryService};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 看板: 静态页 + 过滤列表 + JSON 下载
pub fn dashboard_router(store: InvoiceStore, export: &ExportConfig) -> Router {
    let query_routes = Router::new()
        .route("/api/invoices", get(handlers::list_invoices))
        .with_state(Arc::new(QueryService::new(store.clone())));

    let export_routes = Router::new()
        .route("/api/invoice/:id/download", get(handlers::download_invoice))
        .with_state(Arc::new(ExportService::new(store, export)));

    Router::new()
        .route("/", get(handlers::dashboard_index))
        .route("/health", get(handlers::health_check))
        .merge(query_routes)
        .merge(export_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// 主站: 服务端渲染列表 + 创建接口
pub fn site_router(store: InvoiceStore) -> Router {
    let listing_routes = Router::new()
        .route("/", get(handlers::site_index))
        .with_state(Arc::new(QueryService::new(store.clone())));

    let ingest_routes = Router::new()
        .route("/api/invoice", post(handlers::create_invoice))
        .with_state(Arc::new(IngestService::new(store)));

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(listing_routes)
        .merge(ingest_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// 绑定地址并启动服务
pub async fn serve(app: Router, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await
}
