use crate::db::{self, PageParams};
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::PageQuery;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "List comments by post.", skip_all)]
#[get("/post/{post_id}")]
pub async fn list_handler(
    _user: web::ReqData<models::CurrentUser>,
    path: web::Path<(i32,)>,
    query: web::Query<PageQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let post_id = path.into_inner().0;
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::CommentResponse>::build().store_error(err))?;

    db::comment::fetch_page_by_post(pg_pool.get_ref(), post_id, page)
        .await
        .map(|comments| {
            let list = comments
                .rows
                .into_iter()
                .map(views::CommentResponse::from)
                .collect();
            JsonResponse::build().set_list(list).set_total(comments.total).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::CommentResponse>::build().store_error(err))
}
