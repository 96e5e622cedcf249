use crate::models;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize, Default)]
pub struct LikeResponse {
    pub id: i32,
    pub user_id: i32,
}

impl From<models::Like> for LikeResponse {
    fn from(like: models::Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
        }
    }
}
