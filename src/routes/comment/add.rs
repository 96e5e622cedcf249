use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add comment.", skip_all)]
#[post("")]
pub async fn add_handler(
    user: web::ReqData<models::CurrentUser>,
    form: web::Json<forms::CommentForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate().map_err(|errors| {
        JsonResponse::<views::CommentResponse>::build().bad_request(errors.to_string())
    })?;

    db::comment::insert(pg_pool.get_ref(), form.post_id, user.id, &form.text)
        .await
        .map(|comment| {
            let comment = views::CommentResponse::from(comment);
            JsonResponse::build().set_id(comment.id).set_item(comment).ok("Saved")
        })
        .map_err(|err| JsonResponse::<views::CommentResponse>::build().store_error(err))
}
