use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Delete product.", skip_all)]
#[delete("/{id}")]
pub async fn delete_handler(
    user: web::ReqData<models::CurrentUser>,
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let product_id = path.into_inner().0;

    db::product::delete(pg_pool.get_ref(), user.id, product_id)
        .await
        .map(|_| JsonResponse::<()>::build().set_id(product_id).ok("Deleted"))
        .map_err(|err| JsonResponse::<()>::build().store_error(err))
}
