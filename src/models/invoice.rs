use crate::error::{InvoiceError, Result};
use crate::models::StoredScalar;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// invoices 表的一行, JSON 列保持原始文本
#[derive(Debug, Clone, FromRow)]
pub struct InvoiceRecord {
    pub id: i64,
    pub invoice_no: Option<String>,
    pub invoice_date: Option<String>,
    pub transport_name: Option<String>,
    pub gcn: Option<String>,
    pub place_of_supply: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_address: Option<String>,
    pub receiver_gst: Option<String>,
    pub receiver_state: Option<String>,
    pub receiver_code: Option<String>,
    pub items: Option<String>,
    pub bank_details: Option<String>,
    pub tax_details: Option<String>,
    pub number_of_bags: StoredScalar,
    pub pdf_link: Option<String>,
}

/// JSON 列的解码策略
///
/// 两个页面对空值的处理不同: 看板列表把 NULL 原样输出为 `null`,
/// 首页列表与导出要求 `items`/`tax_details` 必须存在。
/// 格式错误的 JSON 在两种策略下都会失败, 不会静默丢行。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    Lenient,
    Strict,
}

/// 对外返回的发票: `items` 与 `tax_details` 已解码, `bank_details` 保持文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceView {
    pub id: i64,
    pub invoice_no: Option<String>,
    pub invoice_date: Option<String>,
    pub transport_name: Option<String>,
    pub gcn: Option<String>,
    pub place_of_supply: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_address: Option<String>,
    pub receiver_gst: Option<String>,
    pub receiver_state: Option<String>,
    pub receiver_code: Option<String>,
    pub items: Value,
    pub bank_details: Option<String>,
    pub tax_details: Value,
    /// 原样返回存储值, 通常为整数
    pub number_of_bags: Value,
    pub pdf_link: Option<String>,
}

impl InvoiceRecord {
    pub fn into_view(self, policy: DecodePolicy) -> Result<InvoiceView> {
        let items = decode_column(self.id, "items", self.items.as_deref(), policy)?;
        let tax_details = decode_column(self.id, "tax_details", self.tax_details.as_deref(), policy)?;

        Ok(InvoiceView {
            id: self.id,
            invoice_no: self.invoice_no,
            invoice_date: self.invoice_date,
            transport_name: self.transport_name,
            gcn: self.gcn,
            place_of_supply: self.place_of_supply,
            receiver_name: self.receiver_name,
            receiver_address: self.receiver_address,
            receiver_gst: self.receiver_gst,
            receiver_state: self.receiver_state,
            receiver_code: self.receiver_code,
            items,
            bank_details: self.bank_details,
            tax_details,
            number_of_bags: self.number_of_bags.into_value(),
            pdf_link: self.pdf_link,
        })
    }
}

fn decode_column(
    id: i64,
    column: &'static str,
    raw: Option<&str>,
    policy: DecodePolicy,
) -> Result<Value> {
    match (raw, policy) {
        (Some(text), _) => serde_json::from_str(text)
            .map_err(|source| InvoiceError::Decode { id, column, source }),
        (None, DecodePolicy::Lenient) => Ok(Value::Null),
        (None, DecodePolicy::Strict) => Err(InvoiceError::MissingColumn { id, column }),
    }
}

/// 待插入的发票, 嵌套字段已序列化为 JSON 文本
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub invoice_no: String,
    pub invoice_date: String,
    pub transport_name: String,
    pub gcn: String,
    pub place_of_supply: String,
    pub receiver_name: String,
    pub receiver_address: String,
    pub receiver_gst: String,
    pub receiver_state: String,
    pub receiver_code: String,
    pub items: String,
    pub bank_details: String,
    pub tax_details: String,
    pub number_of_bags: i64,
    pub pdf_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(items: Option<&str>, tax_details: Option<&str>) -> InvoiceRecord {
        InvoiceRecord {
            id: 7,
            invoice_no: Some("INV-7".into()),
            invoice_date: Some("2024-01-01".into()),
            transport_name: None,
            gcn: None,
            place_of_supply: None,
            receiver_name: Some("Acme".into()),
            receiver_address: None,
            receiver_gst: None,
            receiver_state: None,
            receiver_code: None,
            items: items.map(str::to_string),
            bank_details: Some(r#"{"bankName":"SBI"}"#.into()),
            tax_details: tax_details.map(str::to_string),
            number_of_bags: StoredScalar::from(3),
            pdf_link: None,
        }
    }

    #[test]
    fn decodes_items_and_tax_details_only() {
        let view = record(Some(r#"[{"name":"Widget","qty":2}]"#), Some(r#"{"cgst":9}"#))
            .into_view(DecodePolicy::Strict)
            .unwrap();
        assert_eq!(view.items, json!([{"name": "Widget", "qty": 2}]));
        assert_eq!(view.tax_details, json!({"cgst": 9}));
        assert_eq!(view.bank_details.as_deref(), Some(r#"{"bankName":"SBI"}"#));
    }

    #[test]
    fn lenient_passes_null_columns_through() {
        let view = record(None, None).into_view(DecodePolicy::Lenient).unwrap();
        assert_eq!(view.items, Value::Null);
        assert_eq!(view.tax_details, Value::Null);
    }

    #[test]
    fn strict_rejects_null_columns() {
        let err = record(Some("[]"), None)
            .into_view(DecodePolicy::Strict)
            .unwrap_err();
        assert!(matches!(err, InvoiceError::MissingColumn { id: 7, column: "tax_details" }));
    }

    #[test]
    fn malformed_json_fails_under_both_policies() {
        for policy in [DecodePolicy::Lenient, DecodePolicy::Strict] {
            let err = record(Some("[{broken"), Some("{}")).into_view(policy).unwrap_err();
            assert!(matches!(err, InvoiceError::Decode { column: "items", .. }));
        }
    }
}
