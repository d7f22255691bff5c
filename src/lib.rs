//! promodb: promotions loaded from a CSV file at startup and served by id
//! over HTTP.

pub mod app;
pub mod config;
pub mod errors;
pub mod loader;
pub mod routes;
pub mod services;
pub mod state;
