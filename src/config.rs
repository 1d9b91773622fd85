use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite 数据库文件路径
    pub path: String,
    /// 写锁等待时间 (秒)
    pub busy_timeout_secs: u64,
    /// 慢查询日志阈值 (秒)
    pub slow_statement_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 导出 JSON 文件的临时目录
    pub dir: String,
    /// 发送完成后删除临时文件
    pub cleanup_after_send: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                path: "/tmp/invoice.db".to_string(),
                busy_timeout_secs: 5,
                slow_statement_secs: 5,
            },
            export: ExportConfig {
                dir: "/tmp".to_string(),
                cleanup_after_send: false,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 < INVOICE_CONFIG 指定的文件 < INVOICE__* 环境变量 < 旧版平铺环境变量
    pub fn load(default_port: u16) -> Result<Self, ConfigError> {
        let mut defaults = Self::default();
        defaults.server.port = default_port;

        let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);

        if let Ok(path) = std::env::var("INVOICE_CONFIG") {
            builder = builder.add_source(File::with_name(&path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix("INVOICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.path", std::env::var("DATABASE_PATH").ok())?
            .set_override_option("export.dir", std::env::var("EXPORT_DIR").ok())?
            .build()?
            .try_deserialize()
    }

    /// 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
