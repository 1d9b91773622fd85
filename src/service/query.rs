use crate::db::{queries, InvoiceStore};
use crate::error::Result;
use crate::models::{DecodePolicy, InvoiceFilter, InvoiceView};
use sqlx::Connection;

/// 查询服务
pub struct QueryService {
    store: InvoiceStore,
}

impl QueryService {
    pub fn new(store: InvoiceStore) -> Self {
        Self { store }
    }

    /// 看板列表: 可选文本/日期过滤, 默认行序, NULL 的 JSON 列输出为 null
    pub async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<InvoiceView>> {
        let mut conn = self.store.connect().await?;
        let rows = queries::list_invoices(&mut conn, filter).await;
        conn.close().await?;
        let rows = rows?;

        tracing::debug!(
            "list_invoices query={:?} date={:?} -> {} rows",
            filter.text(),
            filter.date(),
            rows.len()
        );

        rows.into_iter()
            .map(|row| row.into_view(DecodePolicy::Lenient))
            .collect()
    }

    /// 首页列表: 按 invoice_date 降序, items/tax_details 必须可解码
    pub async fn list_for_site(&self) -> Result<Vec<InvoiceView>> {
        let mut conn = self.store.connect().await?;
        let rows = queries::list_invoices_by_date_desc(&mut conn).await;
        conn.close().await?;

        rows?
            .into_iter()
            .map(|row| row.into_view(DecodePolicy::Strict))
            .collect()
    }
}
