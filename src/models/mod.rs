pub mod filter;
pub mod invoice;
pub mod request;
pub mod scalar;

pub use filter::InvoiceFilter;
pub use invoice::{DecodePolicy, InvoiceRecord, InvoiceView, NewInvoice};
pub use request::CreateInvoiceRequest;
pub use scalar::StoredScalar;
