use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add review post.", skip_all)]
#[post("")]
pub async fn add_handler(
    user: web::ReqData<models::CurrentUser>,
    form: web::Json<forms::ReviewPostForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate().map_err(|errors| {
        JsonResponse::<views::ReviewPostResponse>::build().bad_request(errors.to_string())
    })?;

    let post = db::review_post::insert(pg_pool.get_ref(), &form, user.id)
        .await
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))?;

    services::feed::build_response(pg_pool.get_ref(), post, user.id)
        .await
        .map(|post| JsonResponse::build().set_id(post.id).set_item(post).ok("Saved"))
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))
}
