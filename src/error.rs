use thiserror::Error;

/// 发票服务错误
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Invoice not found")]
    NotFound,

    /// 请求体校验失败
    #[error("{0}")]
    Validation(String),

    /// 写入失败, 原样返回数据库错误文本
    #[error("{0}")]
    Storage(String),

    #[error("invoice {id}: column {column} holds malformed JSON: {source}")]
    Decode {
        id: i64,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invoice {id}: column {column} is NULL")]
    MissingColumn { id: i64, column: &'static str },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
