use crate::config::ExportConfig;
use crate::db::{queries, InvoiceStore};
use crate::error::{InvoiceError, Result};
use crate::models::DecodePolicy;
use sqlx::Connection;
use std::path::{Path, PathBuf};

/// 已落盘的导出文件
#[derive(Debug)]
pub struct ExportedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// 导出服务: 单张发票写成 JSON 文件后作为附件返回
pub struct ExportService {
    store: InvoiceStore,
    dir: PathBuf,
    cleanup_after_send: bool,
}

impl ExportService {
    pub fn new(store: InvoiceStore, config: &ExportConfig) -> Self {
        Self {
            store,
            dir: PathBuf::from(&config.dir),
            cleanup_after_send: config.cleanup_after_send,
        }
    }

    /// 导出文件路径, 仅以 id 区分 (同一 id 并发导出时后写者覆盖)
    pub fn export_path(&self, id: i64) -> PathBuf {
        self.dir.join(export_file_name(id))
    }

    pub async fn export_invoice(&self, id: i64) -> Result<ExportedFile> {
        let mut conn = self.store.connect().await?;
        let row = queries::get_invoice(&mut conn, id).await;
        conn.close().await?;

        let Some(row) = row? else {
            tracing::warn!("export: invoice {} not found", id);
            return Err(InvoiceError::NotFound);
        };

        let view = row.into_view(DecodePolicy::Strict)?;
        let path = self.export_path(id);
        tokio::fs::write(&path, serde_json::to_vec(&view)?).await?;
        let contents = tokio::fs::read(&path).await?;

        if self.cleanup_after_send {
            remove_quietly(&path).await;
        }

        tracing::info!("invoice {} exported to {:?} ({} bytes)", id, path, contents.len());
        Ok(ExportedFile {
            file_name: export_file_name(id),
            path,
            contents,
        })
    }
}

fn export_file_name(id: i64) -> String {
    format!("invoice_{id}.json")
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!("failed to remove export file {:?}: {}", path, e);
    }
}
