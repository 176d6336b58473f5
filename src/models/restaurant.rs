//! Restaurant models

use super::Pizza;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use validator::Validate;

/// Restaurant summary used by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<&Row> for Restaurant {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            address: row.get("address"),
        }
    }
}

/// Restaurant with the pizzas it sells, one entry per price row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub pizzas: Vec<Pizza>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, pizzas: Vec<Pizza>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            pizzas,
        }
    }
}

/// Restaurant to be inserted
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRestaurant {
    #[validate(length(min = 1, max = 50, message = "Restaurant name must be between 1 and 50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Address must be between 1 and 100 characters"))]
    pub address: String,
}
