use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    #[serde(default)]
    #[validate(max_length = 2000)]
    pub description: String,
    pub stock: bool,
    #[validate(minimum = 0)]
    pub price: i64,
    #[validate(minimum = 0.0)]
    #[validate(maximum = 5.0)]
    pub review: f64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub provider: String,
    pub time_limit: DateTime<Utc>,
}
