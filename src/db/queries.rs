//! SQL query constants
//!
//! Contains all SQL used by the store. Listings order by id so that the
//! "natural order" of the API is stable.

/// Schema bootstrap, executed in order at startup
pub const CREATE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) UNIQUE NOT NULL,
        address VARCHAR(100) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        ingredients VARCHAR(100) NOT NULL
    )
    "#,
    // No ON DELETE CASCADE: association rows are removed explicitly
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id SERIAL PRIMARY KEY,
        price DOUBLE PRECISION NOT NULL,
        pizza_id INTEGER NOT NULL REFERENCES pizzas(id),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants(id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id ON restaurant_pizzas(restaurant_id)",
    "CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_pizza_id ON restaurant_pizzas(pizza_id)",
];

pub const LIST_RESTAURANTS: &str = r#"
    SELECT id, name, address
    FROM restaurants
    ORDER BY id
"#;

pub const GET_RESTAURANT: &str = r#"
    SELECT id, name, address
    FROM restaurants
    WHERE id = $1
"#;

pub const COUNT_RESTAURANTS: &str = "SELECT COUNT(*) AS count FROM restaurants";

/// Pizzas sold by a restaurant, one row per price entry
pub const LIST_RESTAURANT_PIZZAS: &str = r#"
    SELECT p.id, p.name, p.ingredients
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    WHERE rp.restaurant_id = $1
    ORDER BY rp.id
"#;

pub const INSERT_RESTAURANT: &str = r#"
    INSERT INTO restaurants (name, address)
    VALUES ($1, $2)
    RETURNING id, name, address
"#;

pub const DELETE_RESTAURANT_PIZZAS_BY_RESTAURANT: &str =
    "DELETE FROM restaurant_pizzas WHERE restaurant_id = $1";

pub const DELETE_RESTAURANT: &str = "DELETE FROM restaurants WHERE id = $1";

pub const LIST_PIZZAS: &str = r#"
    SELECT id, name, ingredients
    FROM pizzas
    ORDER BY id
"#;

pub const GET_PIZZA: &str = r#"
    SELECT id, name, ingredients
    FROM pizzas
    WHERE id = $1
"#;

pub const INSERT_PIZZA: &str = r#"
    INSERT INTO pizzas (name, ingredients)
    VALUES ($1, $2)
    RETURNING id, name, ingredients
"#;

pub const INSERT_RESTAURANT_PIZZA: &str = r#"
    INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
    VALUES ($1, $2, $3)
    RETURNING id
"#;
