//! Pizza API
//!
//! Restaurants, pizzas and the prices restaurants charge for them, served as
//! JSON over HTTP and stored in PostgreSQL.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;

pub use config::Settings;
pub use db::PizzaStore;
pub use error::{ApiResult, AppError};
pub use routes::create_router;
pub use state::{AppState, SharedState};
