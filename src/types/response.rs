use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct DataBody<T: Serialize> {
    data: T,
}

pub enum ApiResponse<T> {
    /// 200 with the payload wrapped in `{data: ...}`.
    Ok(T),
    EmptyOk,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(DataBody { data: v }),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
