use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize, Default)]
pub struct PostAuthor {
    pub id: i32,
    pub name: String,
    pub image: String,
}

impl From<models::User> for PostAuthor {
    fn from(user: models::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            image: user.image,
        }
    }
}

// Denormalized post as served in every listing: author summary plus counts
// recomputed from the live like/comment relations. like_id is the
// requester's own like on this post, 0 when there is none.
#[derive(Debug, Serialize)]
pub struct ReviewPostResponse {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub image: String,
    pub review: f64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub user: PostAuthor,
    pub user_id: i32,
    pub like_count: i64,
    pub like_id: i32,
    pub comment_count: i64,
}

impl ReviewPostResponse {
    pub fn new(
        post: models::ReviewPost,
        author: PostAuthor,
        like_count: i64,
        comment_count: i64,
        like_id: i32,
    ) -> Self {
        Self {
            id: post.id,
            title: post.title,
            text: post.text,
            image: post.image,
            review: post.review,
            category: post.category,
            created_at: post.created_at,
            user: author,
            user_id: post.user_id,
            like_count,
            like_id,
            comment_count,
        }
    }
}
