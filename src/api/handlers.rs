use crate::api::render;
use crate::error::InvoiceError;
use crate::models::{CreateInvoiceRequest, InvoiceFilter};
use crate::service::{ExportService, IngestService, QueryService};
use axum::{
    body::{Body, Bytes},
    extract::{Json, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 看板静态页面
const DASHBOARD_SHELL: &str = include_str!("../../static/dashboard.html");

/// 创建成功响应体
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for InvoiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            InvoiceError::NotFound => StatusCode::NOT_FOUND,
            InvoiceError::Validation(_) | InvoiceError::Storage(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 看板首页
pub async fn dashboard_index() -> Html<&'static str> {
    Html(DASHBOARD_SHELL)
}

/// 看板列表接口
pub async fn list_invoices(
    State(service): State<Arc<QueryService>>,
    Query(filter): Query<InvoiceFilter>,
) -> Response {
    match service.list_invoices(&filter).await {
        Ok(invoices) => (StatusCode::OK, Json(invoices)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 下载单张发票 JSON
pub async fn download_invoice(
    State(service): State<Arc<ExportService>>,
    Path(id): Path<String>,
) -> Response {
    // 非整数 id 与不存在的 id 一样返回 404
    let Ok(id) = id.parse::<i64>() else {
        return InvoiceError::NotFound.into_response();
    };

    match service.export_invoice(id).await {
        Ok(file) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            )
            .body(Body::from(file.contents))
            .unwrap_or_else(|e| {
                tracing::error!("failed to build download response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }),
        Err(e) => e.into_response(),
    }
}

/// 首页: 服务端渲染的发票列表
pub async fn site_index(State(service): State<Arc<QueryService>>) -> Response {
    match service.list_for_site().await {
        Ok(invoices) => Html(render::invoice_listing(&invoices)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 创建发票接口
pub async fn create_invoice(State(service): State<Arc<IngestService>>, body: Bytes) -> Response {
    let request = match CreateInvoiceRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("rejected invoice payload: {}", e);
            return e.into_response();
        }
    };

    match service.create_invoice(request).await {
        Ok(_) => {
            let response = MessageResponse {
                message: "Invoice created successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
