use crate::models::InvoiceView;
use serde_json::Value;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Invoices</title>
<style>
body { font-family: sans-serif; margin: 2rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
th { background: #f3f3f3; }
</style>
</head>
<body>
<h1>Invoices</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// 渲染首页发票表格
pub fn invoice_listing(invoices: &[InvoiceView]) -> String {
    let mut html = String::from(PAGE_HEAD);

    if invoices.is_empty() {
        html.push_str("<p>No invoices yet.</p>\n");
        html.push_str(PAGE_TAIL);
        return html;
    }

    html.push_str(
        "<table>\n<thead><tr><th>Invoice No</th><th>Date</th><th>Receiver</th>\
         <th>GSTIN</th><th>Place of Supply</th><th>Bags</th><th>Items</th><th>PDF</th></tr></thead>\n<tbody>\n",
    );

    for invoice in invoices {
        let bags = match &invoice.number_of_bags {
            Value::Null => String::new(),
            Value::String(s) => escape(s),
            other => other.to_string(),
        };
        let item_count = invoice.items.as_array().map(Vec::len).unwrap_or(0);
        let pdf = invoice
            .pdf_link
            .as_deref()
            .map(pdf_cell)
            .unwrap_or_default();

        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_opt(&invoice.invoice_no),
            escape_opt(&invoice.invoice_date),
            escape_opt(&invoice.receiver_name),
            escape_opt(&invoice.receiver_gst),
            escape_opt(&invoice.place_of_supply),
            bags,
            item_count,
            pdf,
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(PAGE_TAIL);
    html
}

/// 只有 http(s) 链接生成超链接, 其余协议按文本输出
fn pdf_cell(link: &str) -> String {
    let lower = link.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        format!("<a href=\"{0}\">{0}</a>", escape(link))
    } else {
        escape(link)
    }
}

fn escape_opt(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(invoice_no: &str) -> InvoiceView {
        InvoiceView {
            id: 1,
            invoice_no: Some(invoice_no.to_string()),
            invoice_date: Some("2024-02-01".into()),
            transport_name: None,
            gcn: None,
            place_of_supply: Some("Kolkata".into()),
            receiver_name: Some("Acme & Sons".into()),
            receiver_address: None,
            receiver_gst: Some("19ABCDE1234F1Z5".into()),
            receiver_state: None,
            receiver_code: None,
            items: json!([{"name": "Widget"}, {"name": "Bolt"}]),
            bank_details: None,
            tax_details: json!({}),
            number_of_bags: json!(2),
            pdf_link: None,
        }
    }

    #[test]
    fn escapes_markup_in_text_fields() {
        let html = invoice_listing(&[view("<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Acme &amp; Sons"));
    }

    #[test]
    fn shows_item_count_and_bags() {
        let html = invoice_listing(&[view("INV-1")]);
        assert!(html.contains("<td>INV-1</td>"));
        assert!(html.contains("<td>2</td><td>2</td>"));
    }

    #[test]
    fn only_http_links_become_anchors() {
        let mut invoice = view("INV-2");
        invoice.pdf_link = Some("javascript:alert(document.cookie)".into());
        let html = invoice_listing(&[invoice.clone()]);
        assert!(!html.contains("<a href"));
        assert!(html.contains("<td>javascript:alert(document.cookie)</td>"));

        invoice.pdf_link = Some("https://example.com/inv-2.pdf".into());
        let html = invoice_listing(&[invoice]);
        assert!(html.contains(
            "<a href=\"https://example.com/inv-2.pdf\">https://example.com/inv-2.pdf</a>"
        ));
    }

    #[test]
    fn bag_count_is_shown_as_stored() {
        let mut invoice = view("INV-3");
        invoice.number_of_bags = json!("");
        assert!(invoice_listing(&[invoice.clone()]).contains("<td>Kolkata</td><td></td>"));

        invoice.number_of_bags = json!(3.5);
        assert!(invoice_listing(&[invoice]).contains("<td>Kolkata</td><td>3.5</td>"));
    }

    #[test]
    fn empty_listing_has_placeholder() {
        assert!(invoice_listing(&[]).contains("No invoices yet."));
    }
}
