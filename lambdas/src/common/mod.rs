pub mod config;
pub mod errors;
pub mod router;
pub mod store;
pub mod utils;
