pub mod queries;
pub mod store;

pub use queries::*;
pub use store::InvoiceStore;
