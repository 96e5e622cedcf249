//! Requester identity. A trusted upstream (gateway or test harness) puts
//! the authenticated user id in the `x-user-id` header; authentication
//! policy itself lives outside this service. Handlers read the result as
//! `web::ReqData<models::CurrentUser>`.

use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderName,
    Error, HttpMessage,
};
use futures::future::{FutureExt, LocalBoxFuture};
use std::future::{ready, Ready};
use std::rc::Rc;
use std::str::FromStr;

const USER_ID_HEADER: &str = "x-user-id";

pub struct Identity {}

impl Identity {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for Identity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentityMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentityMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct IdentityMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for IdentityMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<ServiceResponse<B>, Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        async move {
            match get_header::<i32>(&req, USER_ID_HEADER) {
                Ok(Some(id)) if id > 0 => {
                    req.extensions_mut().insert(models::CurrentUser { id });
                    service.call(req).await
                }
                Ok(_) => Err(JsonResponse::<()>::build()
                    .unauthorized("user id required")),
                Err(msg) => Err(JsonResponse::<()>::build().unauthorized(msg)),
            }
        }
        .boxed_local()
    }
}

fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let header_value = req.headers().get(HeaderName::from_static(header_name));

    if header_value.is_none() {
        return Ok(None);
    }

    header_value
        .unwrap()
        .to_str()
        .map_err(|_| format!("header {header_name} can't be converted to string"))?
        .parse::<T>()
        .map_err(|_| format!("header {header_name} has wrong type"))
        .map(Some)
}
