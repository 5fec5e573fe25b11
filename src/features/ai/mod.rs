mod routes;
mod service;
mod store;
mod types;

pub use routes::*;
pub use service::*;
pub use store::*;
pub use types::*;
