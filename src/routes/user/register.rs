use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserRegister, RUserRegister, UserRes};
use crate::utils::{password, validate};
use actix_web::{post, web};
use std::sync::Arc;

#[post("")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserRes> {
    validate::validate_register(&body)?;
    log::debug!("register new user {}", body.username);

    let body = body.into_inner();
    let digest = password::hash_blocking(body.password).await?;

    let user = db
        .create_user(DBUserRegister {
            username: body.username,
            name: body.name,
            password: digest,
        })
        .await?;

    Ok(ApiResponse::Ok(UserRes::from_model(&user)))
}
