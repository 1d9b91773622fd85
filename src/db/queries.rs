use crate::models::{InvoiceFilter, InvoiceRecord, NewInvoice};
use sqlx::sqlite::SqliteConnection;
use sqlx::{QueryBuilder, Sqlite};

const SELECT_INVOICES: &str = r#"
    SELECT id, invoice_no, invoice_date, transport_name, gcn, place_of_supply,
           receiver_name, receiver_address, receiver_gst, receiver_state, receiver_code,
           items, bank_details, tax_details, number_of_bags, pdf_link
    FROM invoices
"#;

/// 插入一张发票, 返回自增 id
pub async fn insert_invoice(
    conn: &mut SqliteConnection,
    invoice: &NewInvoice,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO invoices
            (invoice_no, invoice_date, transport_name, gcn, place_of_supply,
             receiver_name, receiver_address, receiver_gst, receiver_state,
             receiver_code, items, bank_details, tax_details, number_of_bags, pdf_link)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&invoice.invoice_no)
    .bind(&invoice.invoice_date)
    .bind(&invoice.transport_name)
    .bind(&invoice.gcn)
    .bind(&invoice.place_of_supply)
    .bind(&invoice.receiver_name)
    .bind(&invoice.receiver_address)
    .bind(&invoice.receiver_gst)
    .bind(&invoice.receiver_state)
    .bind(&invoice.receiver_code)
    .bind(&invoice.items)
    .bind(&invoice.bank_details)
    .bind(&invoice.tax_details)
    .bind(invoice.number_of_bags)
    .bind(&invoice.pdf_link)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// 构建带可选条件的列表查询 (不排序)
pub fn build_list_query(filter: &InvoiceFilter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(SELECT_INVOICES);
    builder.push(" WHERE 1=1");

    if let Some(text) = filter.text() {
        let pattern = format!("%{text}%");
        builder
            .push(" AND (invoice_no LIKE ")
            .push_bind(pattern.clone())
            .push(" OR receiver_name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR receiver_gst LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(date) = filter.date() {
        builder.push(" AND invoice_date = ").push_bind(date.to_string());
    }

    builder
}

/// 按条件查询发票
pub async fn list_invoices(
    conn: &mut SqliteConnection,
    filter: &InvoiceFilter,
) -> Result<Vec<InvoiceRecord>, sqlx::Error> {
    let mut builder = build_list_query(filter);
    let rows = builder
        .build_query_as::<InvoiceRecord>()
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// 全部发票, 按 invoice_date 字符串降序
pub async fn list_invoices_by_date_desc(
    conn: &mut SqliteConnection,
) -> Result<Vec<InvoiceRecord>, sqlx::Error> {
    let sql = format!("{SELECT_INVOICES} ORDER BY invoice_date DESC");
    let rows = sqlx::query_as::<_, InvoiceRecord>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// 按 id 查询单张发票
pub async fn get_invoice(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<InvoiceRecord>, sqlx::Error> {
    let sql = format!("{SELECT_INVOICES} WHERE id = ?");
    let row = sqlx::query_as::<_, InvoiceRecord>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(sql: &str) -> String {
        sql.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn no_filter_selects_everything() {
        let builder = build_list_query(&InvoiceFilter::default());
        assert!(normalized(builder.sql()).ends_with("FROM invoices WHERE 1=1"));
    }

    #[test]
    fn empty_parameters_are_ignored() {
        let builder = build_list_query(&InvoiceFilter::new(Some(""), Some("")));
        assert!(normalized(builder.sql()).ends_with("WHERE 1=1"));
    }

    #[test]
    fn text_and_date_filters_are_conjunctive() {
        let builder = build_list_query(&InvoiceFilter::new(Some("ABC"), Some("2024-01-01")));
        assert!(normalized(builder.sql()).ends_with(
            "WHERE 1=1 AND (invoice_no LIKE ? OR receiver_name LIKE ? OR receiver_gst LIKE ?) \
             AND invoice_date = ?"
        ));
    }
}
