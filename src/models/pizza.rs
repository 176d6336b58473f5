//! Pizza models

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;
use validator::Validate;

/// A pizza as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<&Row> for Pizza {
    fn from(row: &Row) -> Self {
        Self {
            id: row.get("id"),
            name: row.get("name"),
            ingredients: row.get("ingredients"),
        }
    }
}

/// Pizza to be inserted
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewPizza {
    #[validate(length(min = 1, max = 50, message = "Pizza name must be between 1 and 50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Ingredients must be between 1 and 100 characters"))]
    pub ingredients: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_name_length() {
        let pizza = NewPizza {
            name: "x".repeat(51),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        };
        assert!(pizza.validate().is_err());

        let pizza = NewPizza {
            name: "x".repeat(50),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        };
        assert!(pizza.validate().is_ok());
    }

    #[test]
    fn test_pizza_requires_ingredients() {
        let pizza = NewPizza {
            name: "Cheese".to_string(),
            ingredients: String::new(),
        };
        assert!(pizza.validate().is_err());
    }
}
