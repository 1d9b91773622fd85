use serde::Deserialize;

/// 列表查询参数, 空字符串视为未提供
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceFilter {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<String>,
}

impl InvoiceFilter {
    pub fn new(query: Option<&str>, invoice_date: Option<&str>) -> Self {
        Self {
            query: query.map(str::to_string),
            invoice_date: invoice_date.map(str::to_string),
        }
    }

    /// 模糊匹配文本 (发票号 / 收货人 / GST)
    pub fn text(&self) -> Option<&str> {
        self.query.as_deref().filter(|s| !s.is_empty())
    }

    /// 精确匹配的发票日期
    pub fn date(&self) -> Option<&str> {
        self.invoice_date.as_deref().filter(|s| !s.is_empty())
    }
}
