//! Feed assembly: turns review post rows into denormalized responses with
//! like/comment counts, the requester's own like id and the author summary.
//! Counts are recomputed from the live relations on every read; no counter
//! column is trusted.

use crate::db::{self, PageParams, Paginated, StoreError};
use crate::models;
use crate::views;
use sqlx::PgPool;

/// Public feed. `category` of "all" disables the filter; anything else is a
/// case-sensitive substring match on the post category.
pub async fn list_review_posts(
    pool: &PgPool,
    category: &str,
    page: PageParams,
    requester_id: i32,
) -> Result<(Vec<views::ReviewPostResponse>, i64), StoreError> {
    let filter = (category != "all").then_some(category);
    let posts = db::review_post::fetch_page(pool, filter, page).await?;
    assemble(pool, posts, requester_id).await
}

/// Owner-scoped feed: only the requester's own posts, no category filter.
pub async fn my_review_posts(
    pool: &PgPool,
    page: PageParams,
    requester_id: i32,
) -> Result<(Vec<views::ReviewPostResponse>, i64), StoreError> {
    let posts = db::review_post::fetch_page_by_user(pool, requester_id, page).await?;
    assemble(pool, posts, requester_id).await
}

/// Posts the requester has liked, paged over the like rows (most recent
/// like first). A post deleted between the two reads is skipped: the
/// cascade removes its likes too, so the gap is a read-side race only.
pub async fn liked_review_posts(
    pool: &PgPool,
    page: PageParams,
    requester_id: i32,
) -> Result<(Vec<views::ReviewPostResponse>, i64), StoreError> {
    let likes = db::like::fetch_page_by_user(pool, requester_id, page).await?;

    let mut posts = Vec::with_capacity(likes.rows.len());
    for like in likes.rows {
        match db::review_post::fetch(pool, like.post_id).await {
            Ok(post) => posts.push(build_response(pool, post, requester_id).await?),
            Err(StoreError::NotFound) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok((posts, likes.total))
}

pub async fn get_review_post(
    pool: &PgPool,
    post_id: i32,
    requester_id: i32,
) -> Result<views::ReviewPostResponse, StoreError> {
    let post = db::review_post::fetch(pool, post_id).await?;
    build_response(pool, post, requester_id).await
}

async fn assemble(
    pool: &PgPool,
    page: Paginated<models::ReviewPost>,
    requester_id: i32,
) -> Result<(Vec<views::ReviewPostResponse>, i64), StoreError> {
    let mut posts = Vec::with_capacity(page.rows.len());
    for post in page.rows {
        posts.push(build_response(pool, post, requester_id).await?);
    }
    Ok((posts, page.total))
}

pub(crate) async fn build_response(
    pool: &PgPool,
    post: models::ReviewPost,
    requester_id: i32,
) -> Result<views::ReviewPostResponse, StoreError> {
    let like_count = db::like::count_by_post(pool, post.id).await?;
    let comment_count = db::comment::count_by_post(pool, post.id).await?;
    // 0 is the "no like" sentinel the clients rely on
    let like_id = db::like::fetch_by_post_and_user(pool, post.id, requester_id)
        .await?
        .map(|like| like.id)
        .unwrap_or(0);
    let author = db::user::fetch(pool, post.user_id).await?;

    Ok(views::ReviewPostResponse::new(
        post,
        author.into(),
        like_count,
        comment_count,
        like_id,
    ))
}
