pub mod export;
pub mod ingest;
pub mod query;

pub use export::{ExportService, ExportedFile};
pub use ingest::IngestService;
pub use query::QueryService;
