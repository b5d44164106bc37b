use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserUpdate, UserRes};
use crate::utils::webutils::AuthedUser;
use crate::utils::{password, validate};
use actix_web::{get, patch, web};
use std::sync::Arc;

/// Plain projection of the already-resolved identity, no store access.
#[get("/current")]
async fn current(user: AuthedUser) -> ApiResult<UserRes> {
    Ok(ApiResponse::Ok(UserRes::from_model(&user.0)))
}

#[patch("/current")]
async fn update_current(
    db: web::Data<Arc<PostgresService>>,
    user: AuthedUser,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    validate::validate_update(&body)?;
    log::debug!("update profile for {}", user.0.username);

    let body = body.into_inner();

    let digest = match body.password {
        Some(plain) => Some(password::hash_blocking(plain).await?),
        None => None,
    };

    let updated = db.update_user_profile(user.0, body.name, digest).await?;
    Ok(ApiResponse::Ok(UserRes::from_model(&updated)))
}
