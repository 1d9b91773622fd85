use crate::db::{queries, InvoiceStore};
use crate::error::{InvoiceError, Result};
use crate::models::CreateInvoiceRequest;
use sqlx::Connection;

/// 录入服务
pub struct IngestService {
    store: InvoiceStore,
}

impl IngestService {
    pub fn new(store: InvoiceStore) -> Self {
        Self { store }
    }

    /// 写入一张发票, 返回新 id
    ///
    /// 建连失败属于服务端错误; 插入失败映射为 `Storage`, 原样带回数据库错误文本, 不重试。
    pub async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<i64> {
        let invoice = request.into_new_invoice()?;

        let mut conn = self.store.connect().await?;
        let inserted = queries::insert_invoice(&mut conn, &invoice).await;
        conn.close().await?;

        match inserted {
            Ok(id) => {
                tracing::info!("invoice {} created (invoice_no={})", id, invoice.invoice_no);
                Ok(id)
            }
            Err(e) => {
                tracing::error!("insert invoice_no={} failed: {:?}", invoice.invoice_no, e);
                let message = e
                    .as_database_error()
                    .map(|d| d.message().to_string())
                    .unwrap_or_else(|| e.to_string());
                Err(InvoiceError::Storage(message))
            }
        }
    }
}
