use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct CommentForm {
    #[validate(minimum = 1)]
    pub post_id: i32,
    #[validate(min_length = 1)]
    #[validate(max_length = 1000)]
    pub text: String,
}
