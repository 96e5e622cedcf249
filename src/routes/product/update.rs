use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;

// Pushes the stored time_limit out by one day; owner-scoped like every
// other mutation.
#[tracing::instrument(name = "Extend product time limit.", skip_all)]
#[put("/{id}/time_limit")]
pub async fn update_handler(
    user: web::ReqData<models::CurrentUser>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product_id = path.into_inner().0;

    db::product::extend_time_limit(pg_pool.get_ref(), product_id, user.id)
        .await
        .map(|product| {
            let product = views::ProductResponse::from(product);
            JsonResponse::build().set_id(product.id).set_item(product).ok("Updated")
        })
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))
}
