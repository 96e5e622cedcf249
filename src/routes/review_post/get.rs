use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get review post.", skip_all)]
#[get("/{id}")]
pub async fn item_handler(
    user: web::ReqData<models::CurrentUser>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let post_id = path.into_inner().0;

    services::feed::get_review_post(pg_pool.get_ref(), post_id, user.id)
        .await
        .map(|post| JsonResponse::build().set_item(post).ok("OK"))
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))
}
