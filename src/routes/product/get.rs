use crate::db::{self, PageParams, Paginated};
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::{default_page, default_page_size, PageQuery};
use crate::views;
use actix_web::{get, web, Responder, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct TimeLimitQuery {
    pub sort: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    // YYYY-MM
    pub month: String,
}

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

#[tracing::instrument(name = "List my products.", skip_all)]
#[get("/my")]
pub async fn my_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<PageQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))?;

    db::product::fetch_page_by_user(pg_pool.get_ref(), user.id, page)
        .await
        .map(page_response)
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))
}

#[tracing::instrument(name = "List products by time limit.", skip_all)]
#[get("/time_limit")]
pub async fn time_limit_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<TimeLimitQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))?;

    let ascending = match query.sort.as_deref() {
        None | Some("asc") => true,
        Some("desc") => false,
        Some(other) => {
            return Err(JsonResponse::<views::ProductResponse>::build()
                .bad_request(format!("sort must be asc or desc, got {}", other)))
        }
    };

    db::product::fetch_page_time_limit_all(pg_pool.get_ref(), user.id, page, ascending)
        .await
        .map(page_response)
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))
}

#[tracing::instrument(name = "List product days for month.", skip_all)]
#[get("/time_limit/month")]
pub async fn month_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<MonthQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (month_start, month_end) = parse_month(&query.month)
        .and_then(|(year, month)| db::product::month_window(year, month))
        .ok_or_else(|| {
            JsonResponse::<views::ProductYearMonthResponse>::build()
                .bad_request(format!("month must be YYYY-MM, got {}", query.month))
        })?;

    db::product::fetch_time_limit_year_month(pg_pool.get_ref(), user.id, month_start, month_end)
        .await
        .map(|products| {
            let list: Vec<views::ProductYearMonthResponse> = products
                .into_iter()
                .map(views::ProductYearMonthResponse::from)
                .collect();
            JsonResponse::build().set_list(list).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::ProductYearMonthResponse>::build().store_error(err))
}

#[tracing::instrument(name = "List products by time limit date.", skip_all)]
#[get("/time_limit/date")]
pub async fn date_handler(
    user: web::ReqData<models::CurrentUser>,
    query: web::Query<DateQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let page = PageParams::new(query.page, query.page_size)
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))?;

    db::product::fetch_page_time_limit_date(pg_pool.get_ref(), user.id, page, query.date)
        .await
        .map(page_response)
        .map_err(|err| JsonResponse::<views::ProductResponse>::build().store_error(err))
}

fn page_response(page: Paginated<models::Product>) -> actix_web::HttpResponse {
    let list: Vec<views::ProductResponse> = page
        .rows
        .into_iter()
        .map(views::ProductResponse::from)
        .collect();
    JsonResponse::build().set_list(list).set_total(page.total).ok("OK")
}

fn parse_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.split_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::parse_month;

    #[test]
    fn parses_year_month() {
        assert_eq!(parse_month("2024-06"), Some((2024, 6)));
        assert_eq!(parse_month("2023-12"), Some((2023, 12)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_month("2024"), None);
        assert_eq!(parse_month("2024-xx"), None);
        assert_eq!(parse_month(""), None);
    }
}
