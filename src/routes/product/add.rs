use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add product.", skip_all)]
#[post("")]
pub async fn add_handler(
    user: web::ReqData<models::CurrentUser>,
    form: web::Json<forms::ProductForm>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    form.validate().map_err(|errors| {
        JsonResponse::<views::ProductResponse>::build().bad_request(errors.to_string())
    })?;

    db::product::insert(pg_pool.get_ref(), &form, user.id)
        .await
        .map(|product| {
            let product = views::ProductResponse::from(product);
            JsonResponse::build().set_id(product.id).set_item(product).ok("Saved")
        })
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))
}
