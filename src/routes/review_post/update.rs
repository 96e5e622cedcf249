use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::views;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

// Owner-scoped: the WHERE clause of the update is the only existence and
// authorization check; zero affected rows surfaces as 404.
#[tracing::instrument(name = "Update review post.", skip_all)]
#[put("/{id}")]
pub async fn update_handler(
    user: web::ReqData<models::CurrentUser>,
    path: web::Path<(i32,)>,
    form: web::Json<forms::ReviewPostForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let post_id = path.into_inner().0;

    form.validate().map_err(|errors| {
        JsonResponse::<views::ReviewPostResponse>::build().bad_request(errors.to_string())
    })?;

    let post = db::review_post::update(pg_pool.get_ref(), post_id, user.id, &form)
        .await
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))?;

    services::feed::build_response(pg_pool.get_ref(), post, user.id)
        .await
        .map(|post| JsonResponse::build().set_id(post.id).set_item(post).ok("Updated"))
        .map_err(|err| JsonResponse::<views::ReviewPostResponse>::build().store_error(err))
}
