#[macro_use]
pub mod utils;
pub mod common;
pub mod config;
pub mod endpoints;
pub mod logger;
pub mod models;
pub mod router;
