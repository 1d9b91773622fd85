use invoice_ledger::{api, logging, AppConfig, InvoiceStore};
use tracing::info;

/// 主站默认端口
const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // 加载配置
    let config = AppConfig::load(DEFAULT_PORT)?;
    info!("Starting invoice site with config: {:?}", config);

    // 建表 (幂等)
    let store = InvoiceStore::open(&config.database);
    store.ensure_schema().await?;

    let app = api::site_router(store);

    info!("API Endpoints:");
    info!("  GET  /             - invoice listing (by date, newest first)");
    info!("  POST /api/invoice  - create invoice");
    info!("  GET  /health       - health check");

    api::serve(app, &config.bind_addr()).await?;

    Ok(())
}
