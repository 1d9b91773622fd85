pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::InvoiceStore;
pub use error::InvoiceError;
pub use service::{ExportService, IngestService, QueryService};
