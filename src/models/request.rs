use crate::error::{InvoiceError, Result};
use crate::models::NewInvoice;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// 创建发票请求体, 字段全部必填
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub invoice_no: String,
    pub invoice_date: String,
    pub transport_name: String,
    pub gcn: String,
    pub place_of_supply: String,
    pub receiver_name: String,
    pub receiver_address: String,
    #[serde(rename = "receiverGST")]
    pub receiver_gst: String,
    pub receiver_state: String,
    pub receiver_code: String,
    pub items: Value,
    pub bank_details: Value,
    pub tax_details: Value,
    #[serde(deserialize_with = "bag_count")]
    pub number_of_bags: i64,
    pub pdf_link: String,
}

impl CreateInvoiceRequest {
    /// 校验原始 JSON, 缺字段或类型不符时返回 Validation 错误
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| InvoiceError::Validation(format!("request body is not valid JSON: {e}")))?;
        if !value.is_object() {
            return Err(InvoiceError::Validation(
                "request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| InvoiceError::Validation(e.to_string()))
    }

    /// 嵌套字段序列化为 JSON 文本, 内部结构不做校验
    pub fn into_new_invoice(self) -> Result<NewInvoice> {
        Ok(NewInvoice {
            items: serde_json::to_string(&self.items)?,
            bank_details: serde_json::to_string(&self.bank_details)?,
            tax_details: serde_json::to_string(&self.tax_details)?,
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
            number_of_bags: self.number_of_bags,
            pdf_link: self.pdf_link,
        })
    }
}

/// 表单提交的袋数可能是数字也可能是数字字符串
fn bag_count<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("numberOfBags must be an integer, got {s:?}"))),
    }
}
