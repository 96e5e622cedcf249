use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

// code and user_id stay internal, the public shape never carried them
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub stock: bool,
    pub price: i64,
    pub review: f64,
    pub url: String,
    pub image: String,
    pub provider: String,
    pub time_limit: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<models::Product> for ProductResponse {
    fn from(product: models::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            stock: product.stock,
            price: product.price,
            review: product.review,
            url: product.url,
            image: product.image,
            provider: product.provider,
            time_limit: product.time_limit,
            created_at: product.created_at,
        }
    }
}

// One entry per day of the month that has at least one product;
// feeds the calendar heat-map.
#[derive(Debug, Serialize)]
pub struct ProductYearMonthResponse {
    pub time_limit: DateTime<Utc>,
}

impl From<models::Product> for ProductYearMonthResponse {
    fn from(product: models::Product) -> Self {
        Self {
            time_limit: product.time_limit,
        }
    }
}
