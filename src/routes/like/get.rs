use crate::helpers::JsonResponse;
use crate::models;
use crate::services;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get my like count.", skip_all)]
#[get("/count")]
pub async fn count_handler(
    user: web::ReqData<models::CurrentUser>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    services::like::my_like_count(pg_pool.get_ref(), user.id)
        .await
        .map(|count| JsonResponse::<()>::build().set_total(count).ok("OK"))
        .map_err(|err| JsonResponse::<()>::build().store_error(err))
}
