use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ReviewPostForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub title: String,
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub text: String,
    #[serde(default)]
    pub image: String,
    #[validate(minimum = 0.0)]
    #[validate(maximum = 5.0)]
    pub review: f64,
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub category: String,
}
