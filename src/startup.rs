use crate::configuration::Settings;
use crate::middleware;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/review_posts")
                    .wrap(middleware::Identity::new())
                    // fixed paths before /{id}
                    .service(routes::review_post::my_handler)
                    .service(routes::review_post::liked_handler)
                    .service(routes::review_post::list_handler)
                    .service(routes::review_post::item_handler)
                    .service(routes::review_post::add_handler)
                    .service(routes::review_post::update_handler)
                    .service(routes::review_post::delete_handler),
            )
            .service(
                web::scope("/likes")
                    .wrap(middleware::Identity::new())
                    .service(routes::like::count_handler)
                    .service(routes::like::add_handler)
                    .service(routes::like::delete_handler),
            )
            .service(
                web::scope("/comments")
                    .wrap(middleware::Identity::new())
                    .service(routes::comment::list_handler)
                    .service(routes::comment::add_handler)
                    .service(routes::comment::delete_handler),
            )
            .service(
                web::scope("/products")
                    .wrap(middleware::Identity::new())
                    .service(routes::product::my_handler)
                    .service(routes::product::month_handler)
                    .service(routes::product::date_handler)
                    .service(routes::product::time_limit_handler)
                    .service(routes::product::add_handler)
                    .service(routes::product::update_handler)
                    .service(routes::product::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
