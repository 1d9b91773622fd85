pub mod handlers;
pub mod render;
pub mod routes;

pub use handlers::*;
pub use routes::{dashboard_router, serve, site_router};
