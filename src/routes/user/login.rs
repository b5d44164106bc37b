use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserRes};
use crate::utils::{password, token, validate};
use actix_web::{post, web};
use std::sync::Arc;

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserRes> {
    validate::validate_login(&body)?;
    log::debug!("login attempt for {}", body.username);

    let body = body.into_inner();

    // unknown username and wrong password take the same exit
    let user = db
        .get_user_by_username(&body.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !password::verify_blocking(body.password, user.password.clone()).await? {
        return Err(AppError::invalid_credentials());
    }

    let fresh = token::new_token();
    let user = db.set_user_token(user, &fresh).await?;

    Ok(ApiResponse::Ok(UserRes::with_token(&user)))
}
