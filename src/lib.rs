pub mod api;
pub mod engine;
pub mod models;
pub mod store;
pub mod utils;
