use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add like.", skip_all)]
#[post("")]
pub async fn add_handler(
    user: web::ReqData<models::CurrentUser>,
    form: web::Json<forms::LikeForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate()
        .map_err(|errors| JsonResponse::<views::LikeResponse>::build().bad_request(errors.to_string()))?;

    services::like::create_like(pg_pool.get_ref(), form.post_id, user.id, form.post_user_id)
        .await
        .map(|like| JsonResponse::build().set_id(like.id).set_item(like).ok("Saved"))
        .map_err(|err| JsonResponse::<views::LikeResponse>::build().store_error(err))
}
