use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

// Keyed by the liked post's author, not the post id (see services::like).
#[tracing::instrument(name = "Delete like.", skip_all)]
#[delete("/{post_user_id}")]
pub async fn delete_handler(
    user: web::ReqData<models::CurrentUser>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let post_user_id = path.into_inner().0;

    services::like::delete_like(pg_pool.get_ref(), user.id, post_user_id)
        .await
        .map(|_| JsonResponse::<()>::build().ok("Deleted"))
        .map_err(|err| JsonResponse::<()>::build().store_error(err))
}
