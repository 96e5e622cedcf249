use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::Comment> for CommentResponse {
    fn from(comment: models::Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}
