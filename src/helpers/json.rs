use crate::db::StoreError;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
    pub(crate) total: Option<i64>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
    total: Option<i64>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            id: None,
            item: None,
            list: None,
            total: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn set_total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn ok(self, message: impl Into<String>) -> HttpResponse {
        let message = message.into();
        let message = if message.trim().is_empty() {
            String::from("Success")
        } else {
            message
        };

        HttpResponse::Ok().json(JsonResponse {
            status: "OK".to_string(),
            message,
            code: 200,
            id: self.id,
            item: self.item,
            list: self.list,
            total: self.total,
        })
    }

    fn error(self, code: StatusCode, message: String) -> Error {
        let response = HttpResponse::build(code).json(JsonResponse::<T> {
            status: "Error".to_string(),
            message: message.clone(),
            code: code.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
            total: self.total,
        });
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn unauthorized(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::UNAUTHORIZED, message.into())
    }

    pub fn not_found(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::NOT_FOUND, message.into())
    }

    pub fn conflict(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::CONFLICT, message.into())
    }

    pub fn internal_server_error(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    pub fn service_unavailable(self, message: impl Into<String>) -> Error {
        self.error(StatusCode::SERVICE_UNAVAILABLE, message.into())
    }

    /// Wire mapping of the store taxonomy: NotFound→404, Duplicate→409,
    /// Validation→400, Unavailable→503.
    pub fn store_error(self, err: StoreError) -> Error {
        match err {
            StoreError::NotFound => self.not_found("Object not found"),
            StoreError::Duplicate => self.conflict("Already exists"),
            StoreError::Validation(message) => self.bad_request(message),
            StoreError::Unavailable(err) => {
                tracing::error!("store unavailable: {:?}", err);
                self.service_unavailable("Service temporarily unavailable")
            }
        }
    }
}
