use serde::{Deserialize, Serialize};
use serde_valid::Validate;

// post_user_id is the liked post's author; the delete endpoint is keyed
// by it, so the client sends it along at create time.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct LikeForm {
    #[validate(minimum = 1)]
    pub post_id: i32,
    #[validate(minimum = 1)]
    pub post_user_id: i32,
}
