//! Restaurant/pizza price association models

use super::validation_messages;
use crate::error::{validation_error, AppError, MISSING_REQUIRED_FIELDS};
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /restaurant_pizzas`
///
/// Every field is optional at the wire level so that an absent or `null`
/// field is reported as missing rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRestaurantPizzaRequest {
    #[validate(range(min = 1.0, max = 30.0, message = "Price must be between 1 and 30"))]
    pub price: Option<f64>,
    pub pizza_id: Option<i64>,
    pub restaurant_id: Option<i64>,
}

/// Association row to be inserted, after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub pizza_id: i32,
    pub restaurant_id: i32,
}

impl CreateRestaurantPizzaRequest {
    /// Check presence first, then the price range.
    ///
    /// Ids beyond the key column's range cannot reference any row, so they
    /// fail the same way an unknown id fails at insert time.
    pub fn into_new(self) -> Result<NewRestaurantPizza, AppError> {
        let (Some(price), Some(pizza_id), Some(restaurant_id)) =
            (self.price, self.pizza_id, self.restaurant_id)
        else {
            return Err(validation_error(MISSING_REQUIRED_FIELDS));
        };

        if let Err(errors) = self.validate() {
            return Err(AppError::Validation(validation_messages(&errors)));
        }

        Ok(NewRestaurantPizza {
            price,
            pizza_id: row_id("pizza_id", pizza_id)?,
            restaurant_id: row_id("restaurant_id", restaurant_id)?,
        })
    }
}

fn row_id(field: &str, id: i64) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| AppError::Integrity(format!("{field} {id} cannot reference a row")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PRICE_OUT_OF_RANGE;
    use pretty_assertions::assert_eq;

    fn request(price: Option<f64>, pizza_id: Option<i64>, restaurant_id: Option<i64>) -> CreateRestaurantPizzaRequest {
        CreateRestaurantPizzaRequest {
            price,
            pizza_id,
            restaurant_id,
        }
    }

    fn messages(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation(messages) => messages,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_reported_first() {
        // An out-of-range price must not mask the missing field
        let err = request(Some(99.0), None, Some(1)).into_new().unwrap_err();
        assert_eq!(messages(err), vec![MISSING_REQUIRED_FIELDS.to_string()]);

        let err = request(None, Some(1), Some(1)).into_new().unwrap_err();
        assert_eq!(messages(err), vec![MISSING_REQUIRED_FIELDS.to_string()]);

        let err = request(Some(5.0), Some(1), None).into_new().unwrap_err();
        assert_eq!(messages(err), vec![MISSING_REQUIRED_FIELDS.to_string()]);
    }

    #[test]
    fn test_price_out_of_range() {
        for price in [0.0, 0.99, 30.01, 31.0, -5.0] {
            let err = request(Some(price), Some(1), Some(1)).into_new().unwrap_err();
            assert_eq!(messages(err), vec![PRICE_OUT_OF_RANGE.to_string()]);
        }
    }

    #[test]
    fn test_price_bounds_inclusive() {
        for price in [1.0, 15.0, 30.0] {
            let new = request(Some(price), Some(2), Some(3)).into_new().unwrap();
            assert_eq!(
                new,
                NewRestaurantPizza {
                    price,
                    pizza_id: 2,
                    restaurant_id: 3,
                }
            );
        }
    }

    #[test]
    fn test_ids_beyond_key_range_are_integrity_errors() {
        let err = request(Some(15.0), Some(3_000_000_000), Some(1)).into_new().unwrap_err();
        assert!(matches!(err, AppError::Integrity(_)), "{err:?}");

        let err = request(Some(15.0), Some(1), Some(-99_999_999_999)).into_new().unwrap_err();
        assert!(matches!(err, AppError::Integrity(_)), "{err:?}");

        // Range checks still come first
        let err = request(Some(31.0), Some(3_000_000_000), Some(1)).into_new().unwrap_err();
        assert_eq!(messages(err), vec![PRICE_OUT_OF_RANGE.to_string()]);
    }

    #[test]
    fn test_null_fields_deserialize_as_missing() {
        let req: CreateRestaurantPizzaRequest =
            serde_json::from_str(r#"{"price": null, "pizza_id": 1, "restaurant_id": 1}"#).unwrap();
        let err = req.into_new().unwrap_err();
        assert_eq!(messages(err), vec![MISSING_REQUIRED_FIELDS.to_string()]);
    }

    #[test]
    fn test_integer_price_accepted() {
        let req: CreateRestaurantPizzaRequest =
            serde_json::from_str(r#"{"price": 15, "pizza_id": 1, "restaurant_id": 1}"#).unwrap();
        assert_eq!(req.into_new().unwrap().price, 15.0);
    }
}
