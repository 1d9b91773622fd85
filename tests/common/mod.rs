#![allow(dead_code)]

use invoice_ledger::{AppConfig, InvoiceStore};
use serde_json::{json, Value};
use sqlx::Connection;
use tempfile::TempDir;

pub struct TestEnv {
    pub dir: TempDir,
    pub config: AppConfig,
    pub store: InvoiceStore,
}

pub async fn setup() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig::default();
    config.database.path = dir.path().join("invoice.db").to_string_lossy().into_owned();
    config.export.dir = dir.path().to_string_lossy().into_owned();

    let store = InvoiceStore::open(&config.database);
    store.ensure_schema().await.unwrap();

    TestEnv { dir, config, store }
}

pub fn payload(invoice_no: &str, receiver_name: &str, receiver_gst: &str, date: &str) -> Value {
    json!({
        "invoiceNo": invoice_no,
        "invoiceDate": date,
        "transportName": "Road Express",
        "gcn": "GCN-42",
        "placeOfSupply": "Kolkata",
        "receiverName": receiver_name,
        "receiverAddress": "12 Park Street",
        "receiverGST": receiver_gst,
        "receiverState": "West Bengal",
        "receiverCode": "19",
        "items": [{"name": "Widget", "qty": 2}, {"name": "Bolt", "qty": 10}],
        "bankDetails": {"bankName": "SBI", "branch": "Park Street", "accountNo": "0001", "ifscCode": "SBIN0000001"},
        "taxDetails": {"cgst": 9, "sgst": 9, "showCgst": true},
        "numberOfBags": 3,
        "pdfLink": "https://example.com/invoice.pdf"
    })
}

/// 绕过录入服务直接写库, 模拟库外写入的数据
pub async fn insert_raw(store: &InvoiceStore, invoice_no: &str, items: Option<&str>, tax_details: Option<&str>) {
    let mut conn = store.connect().await.unwrap();
    sqlx::query(
        "INSERT INTO invoices (invoice_no, invoice_date, items, bank_details, tax_details) \
         VALUES (?, '2024-03-01', ?, NULL, ?)",
    )
    .bind(invoice_no)
    .bind(items)
    .bind(tax_details)
    .execute(&mut conn)
    .await
    .unwrap();
    conn.close().await.unwrap();
}

/// 库外写入, number_of_bags 以 SQL 字面量给出 ('' / 3.5 / NULL)
pub async fn insert_with_bags(store: &InvoiceStore, invoice_no: &str, bags_literal: &str) {
    let sql = format!(
        "INSERT INTO invoices (invoice_no, invoice_date, items, bank_details, tax_details, number_of_bags) \
         VALUES (?, '2024-03-01', '[]', '{{}}', '{{}}', {bags_literal})"
    );
    let mut conn = store.connect().await.unwrap();
    sqlx::query(&sql)
        .bind(invoice_no)
        .execute(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();
}
