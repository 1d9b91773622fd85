use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use std::time::Duration;

/// 建表语句, 可重复执行
const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices
        (id INTEGER PRIMARY KEY AUTOINCREMENT,
         invoice_no TEXT,
         invoice_date TEXT,
         transport_name TEXT,
         gcn TEXT,
         place_of_supply TEXT,
         receiver_name TEXT,
         receiver_address TEXT,
         receiver_gst TEXT,
         receiver_state TEXT,
         receiver_code TEXT,
         items TEXT,
         bank_details TEXT,
         tax_details TEXT,
         number_of_bags INTEGER,
         pdf_link TEXT)
"#;

/// 发票库: 只保存连接参数, 每次操作单独建立并关闭连接
#[derive(Debug, Clone)]
pub struct InvoiceStore {
    options: SqliteConnectOptions,
}

impl InvoiceStore {
    pub fn open(config: &DatabaseConfig) -> Self {
        // 慢查询按配置阈值记录为 WARN
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            // 保持单文件回滚日志, 不生成 -wal/-shm
            .journal_mode(SqliteJournalMode::Delete)
            .busy_timeout(Duration::from_secs(config.busy_timeout_secs))
            .log_slow_statements(
                tracing::log::LevelFilter::Warn,
                Duration::from_secs(config.slow_statement_secs),
            );

        Self { options }
    }

    /// 打开一个短连接, 调用方负责 close
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }

    /// 确保 invoices 表存在 (进程启动时显式调用一次)
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(CREATE_INVOICES).execute(&mut conn).await;
        conn.close().await?;
        result?;

        tracing::info!("invoices schema ready");
        Ok(())
    }
}
