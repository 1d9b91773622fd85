use invoice_ledger::{api, logging, AppConfig, InvoiceStore};
use tracing::info;

/// 看板默认端口, 与主站错开
const DEFAULT_PORT: u16 = 5001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = AppConfig::load(DEFAULT_PORT)?;
    info!("Starting invoice dashboard with config: {:?}", config);

    let store = InvoiceStore::open(&config.database);
    store.ensure_schema().await?;

    let app = api::dashboard_router(store, &config.export);

    info!("API Endpoints:");
    info!("  GET  /                           - dashboard");
    info!("  GET  /api/invoices               - list invoices (?query=&invoice_date=)");
    info!("  GET  /api/invoice/:id/download   - download invoice JSON");
    info!("  GET  /health                     - health check");

    api::serve(app, &config.bind_addr()).await?;

    Ok(())
}
