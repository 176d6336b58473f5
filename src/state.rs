//! Application state management
//!
//! Contains shared state accessible across all handlers. The store is
//! built in `main` before serving and handed to the router here.

use crate::db::PizzaStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Relational store for restaurants, pizzas and prices
    pub store: PizzaStore,
}

impl AppState {
    pub fn new(store: PizzaStore) -> Self {
        Self { store }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
