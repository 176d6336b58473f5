//! Demo data for local development
//!
//! Only runs against an empty store, so restarting with seeding enabled
//! leaves existing data alone.

use crate::db::PizzaStore;
use crate::error::AppError;
use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use tracing::info;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Sottocasa NYC", "298 Atlantic Ave, Brooklyn, NY 11201"),
    ("PizzArte", "69 W 55th St, New York, NY 10019"),
    ("Kiki's Pizza", "1 Bleecker St, New York, NY 10012"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Cheese", "Dough, Tomato Sauce, Cheese"),
    ("Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Margherita", "Dough, Tomato Sauce, Mozzarella, Basil"),
];

/// (restaurant index, pizza index, price)
const PRICES: &[(usize, usize, f64)] = &[
    (0, 0, 10.0),
    (0, 1, 12.5),
    (1, 2, 15.0),
    (1, 0, 9.0),
    (2, 1, 11.0),
];

fn demo_restaurants() -> Vec<NewRestaurant> {
    RESTAURANTS
        .iter()
        .map(|(name, address)| NewRestaurant {
            name: name.to_string(),
            address: address.to_string(),
        })
        .collect()
}

fn demo_pizzas() -> Vec<NewPizza> {
    PIZZAS
        .iter()
        .map(|(name, ingredients)| NewPizza {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
        })
        .collect()
}

/// Insert the demo data if no restaurant exists yet.
///
/// Returns whether anything was inserted.
pub async fn seed_demo_data(store: &PizzaStore) -> Result<bool, AppError> {
    let existing = store.count_restaurants().await?;
    if existing > 0 {
        info!("Skipping demo data: store already has {} restaurants", existing);
        return Ok(false);
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for new in demo_restaurants() {
        restaurants.push(store.create_restaurant(&new).await?);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for new in demo_pizzas() {
        pizzas.push(store.create_pizza(&new).await?);
    }

    for &(restaurant, pizza, price) in PRICES {
        store
            .create_restaurant_pizza(&NewRestaurantPizza {
                price,
                pizza_id: pizzas[pizza].id,
                restaurant_id: restaurants[restaurant].id,
            })
            .await?;
    }

    info!(
        "Demo data inserted: {} restaurants, {} pizzas, {} prices",
        restaurants.len(),
        pizzas.len(),
        PRICES.len()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_demo_records_are_valid() {
        for restaurant in demo_restaurants() {
            assert!(restaurant.validate().is_ok(), "{restaurant:?}");
        }
        for pizza in demo_pizzas() {
            assert!(pizza.validate().is_ok(), "{pizza:?}");
        }
    }

    #[test]
    fn test_demo_prices_reference_known_rows() {
        for &(restaurant, pizza, price) in PRICES {
            assert!(restaurant < RESTAURANTS.len());
            assert!(pizza < PIZZAS.len());
            assert!((1.0..=30.0).contains(&price));
        }
    }

    #[test]
    fn test_demo_restaurant_names_unique() {
        let mut names: Vec<_> = RESTAURANTS.iter().map(|(name, _)| *name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RESTAURANTS.len());
    }
}
