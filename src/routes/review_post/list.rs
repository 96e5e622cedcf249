use crate::db::PageParams;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::{default_page, default_page_size, PageQuery};
use crate::services;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_category() -> String {
    "all".to_string()
}

#[tracing::instrument(name = "List review posts.", skip_all)]
#[get("")]
pub async fn list_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<FeedQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))?;

    services::feed::list_review_posts(pg_pool.get_ref(), &query.category, page, user.id)
        .await
        .map(|(posts, total)| JsonResponse::build().set_list(posts).set_total(total).ok("OK"))
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))
}

#[tracing::instrument(name = "List my review posts.", skip_all)]
#[get("/my")]
pub async fn my_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<PageQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))?;

    services::feed::my_review_posts(pg_pool.get_ref(), page, user.id)
        .await
        .map(|(posts, total)| JsonResponse::build().set_list(posts).set_total(total).ok("OK"))
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))
}

#[tracing::instrument(name = "List liked review posts.", skip_all)]
#[get("/liked")]
pub async fn liked_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<PageQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))?;

    services::feed::liked_review_posts(pg_pool.get_ref(), page, user.id)
        .await
        .map(|(posts, total)| JsonResponse::build().set_list(posts).set_total(total).ok("OK"))
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))
}
