//! Database access
//!
//! `PizzaStore` owns the connection pool and every query the API runs.
//! Writes run inside a transaction that commits on success; an early
//! return drops the transaction, which rolls it back.

pub mod queries;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::{
    validation_messages, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant,
    RestaurantDetail,
};
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::error::SqlState;
use tokio_postgres::NoTls;
use tracing::{debug, info, warn};
use validator::Validate;

/// Handle to the relational store, shared by all handlers
#[derive(Clone)]
pub struct PizzaStore {
    pool: Pool,
}

impl PizzaStore {
    /// Wrap an existing pool without touching the database
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Build a pool from configuration and verify it with a probe query
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let store = Self::new(create_pool(config)?);

        let client = store.pool.get().await?;
        client.query_one("SELECT 1 AS ok", &[]).await?;
        drop(client);

        info!(
            "Database connection established ({}:{}/{}, TLS: {})",
            config.host, config.port, config.database, config.use_tls
        );
        Ok(store)
    }

    /// Create tables and indexes if they don't exist
    pub async fn init_schema(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        for statement in queries::CREATE_SCHEMA {
            client.batch_execute(statement).await?;
        }
        info!("Database tables initialized");
        Ok(())
    }

    /// Close the pool; outstanding connections are dropped as they return
    pub fn close(&self) {
        self.pool.close();
        info!("Database pool closed");
    }

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(queries::LIST_RESTAURANTS, &[]).await?;
        Ok(rows.iter().map(Restaurant::from).collect())
    }

    pub async fn count_restaurants(&self) -> Result<i64, AppError> {
        let client = self.pool.get().await?;
        let row = client.query_one(queries::COUNT_RESTAURANTS, &[]).await?;
        Ok(row.get("count"))
    }

    /// Restaurant with its pizzas, or `None` if the id is unknown
    pub async fn find_restaurant(&self, id: i32) -> Result<Option<RestaurantDetail>, AppError> {
        let client = self.pool.get().await?;

        let Some(row) = client.query_opt(queries::GET_RESTAURANT, &[&id]).await? else {
            return Ok(None);
        };
        let restaurant = Restaurant::from(&row);

        let pizzas = client
            .query(queries::LIST_RESTAURANT_PIZZAS, &[&id])
            .await?
            .iter()
            .map(Pizza::from)
            .collect();

        Ok(Some(RestaurantDetail::new(restaurant, pizzas)))
    }

    pub async fn create_restaurant(&self, new: &NewRestaurant) -> Result<Restaurant, AppError> {
        new.validate()
            .map_err(|e| AppError::Validation(validation_messages(&e)))?;

        let client = self.pool.get().await?;
        let row = client
            .query_one(queries::INSERT_RESTAURANT, &[&new.name, &new.address])
            .await
            .map_err(map_write_error)?;

        let restaurant = Restaurant::from(&row);
        info!("Restaurant created: {} (id: {})", restaurant.name, restaurant.id);
        Ok(restaurant)
    }

    /// Delete a restaurant together with its price rows.
    ///
    /// Returns `false` when no restaurant has this id; nothing is changed then.
    pub async fn delete_restaurant(&self, id: i32) -> Result<bool, AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let removed_links = tx
            .execute(queries::DELETE_RESTAURANT_PIZZAS_BY_RESTAURANT, &[&id])
            .await?;
        let removed = tx.execute(queries::DELETE_RESTAURANT, &[&id]).await?;

        if removed == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        info!(
            "Restaurant deleted (id: {}, price rows removed: {})",
            id, removed_links
        );
        Ok(true)
    }

    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(queries::LIST_PIZZAS, &[]).await?;
        Ok(rows.iter().map(Pizza::from).collect())
    }

    pub async fn find_pizza(&self, id: i32) -> Result<Option<Pizza>, AppError> {
        let client = self.pool.get().await?;
        let row = client.query_opt(queries::GET_PIZZA, &[&id]).await?;
        Ok(row.as_ref().map(Pizza::from))
    }

    pub async fn create_pizza(&self, new: &NewPizza) -> Result<Pizza, AppError> {
        new.validate()
            .map_err(|e| AppError::Validation(validation_messages(&e)))?;

        let client = self.pool.get().await?;
        let row = client
            .query_one(queries::INSERT_PIZZA, &[&new.name, &new.ingredients])
            .await
            .map_err(map_write_error)?;

        let pizza = Pizza::from(&row);
        info!("Pizza created: {} (id: {})", pizza.name, pizza.id);
        Ok(pizza)
    }

    /// Insert a price row and return the pizza it points at.
    ///
    /// A pizza or restaurant id that does not exist surfaces as
    /// [`AppError::Integrity`] and leaves the store unchanged.
    pub async fn create_restaurant_pizza(&self, new: &NewRestaurantPizza) -> Result<Pizza, AppError> {
        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;

        let row = tx
            .query_one(
                queries::INSERT_RESTAURANT_PIZZA,
                &[&new.price, &new.pizza_id, &new.restaurant_id],
            )
            .await
            .map_err(map_write_error)?;
        let link_id: i32 = row.get("id");

        let pizza = tx
            .query_opt(queries::GET_PIZZA, &[&new.pizza_id])
            .await?
            .as_ref()
            .map(Pizza::from)
            .ok_or_else(|| {
                AppError::Internal(format!("Pizza {} vanished after insert", new.pizza_id))
            })?;

        tx.commit().await?;
        debug!(
            "Price row {} created: restaurant {} sells pizza {} at {}",
            link_id, new.restaurant_id, new.pizza_id, new.price
        );
        Ok(pizza)
    }
}

/// Translate constraint violations into [`AppError::Integrity`]
fn map_write_error(e: tokio_postgres::Error) -> AppError {
    let violation = matches!(
        e.code(),
        Some(code) if *code == SqlState::FOREIGN_KEY_VIOLATION || *code == SqlState::UNIQUE_VIOLATION
    );

    if violation {
        AppError::Integrity(e.to_string())
    } else {
        AppError::Database(e)
    }
}

/// Create a connection pool with given configuration
pub fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));

    if config.use_tls {
        let root_store = root_store_from(rustls_native_certs::load_native_certs());

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);

        cfg.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
    } else {
        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
    }
}

/// Trust store from the platform's certificates, logging any that are unusable
fn root_store_from(certs: rustls_native_certs::CertificateResult) -> rustls::RootCertStore {
    for e in &certs.errors {
        warn!("Failed to load native certificate: {}", e);
    }

    let mut root_store = rustls::RootCertStore::empty();
    for cert in certs.certs {
        if let Err(e) = root_store.add(cert) {
            warn!("Skipping unusable root certificate: {}", e);
        }
    }
    root_store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_is_lazy() {
        // Nothing listens here; building the pool must not try to connect
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            max_pool_size: 2,
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config).unwrap();
        assert_eq!(pool.status().max_size, 2);
        assert_eq!(pool.status().size, 0);
    }

    #[test]
    fn test_root_store_skips_unparsable_certificates() {
        let mut certs = rustls_native_certs::CertificateResult::default();
        certs
            .certs
            .push(rustls::pki_types::CertificateDer::from(vec![0u8, 1, 2, 3]));

        let root_store = root_store_from(certs);
        assert!(root_store.is_empty());
    }

    #[tokio::test]
    async fn test_create_restaurant_validates_before_store_access() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        };
        let store = PizzaStore::new(create_pool(&config).unwrap());
        let err = store
            .create_restaurant(&NewRestaurant {
                name: String::new(),
                address: "1 Main St".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
