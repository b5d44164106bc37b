use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use entity::user::Model as UserModel;
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

/// The identity behind the `Authorization` header token. Resolving it is a
/// precondition of the protected handlers: by the time a handler body runs
/// with an `AuthedUser` argument, the token has already matched a user row.
pub struct AuthedUser(pub UserModel);

fn header_token(req: &HttpRequest) -> Option<String> {
    let raw = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    // the header carries the bare token; tolerate a Bearer prefix
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let db = req.app_data::<web::Data<Arc<PostgresService>>>().cloned();
        let token = header_token(req);

        Box::pin(async move {
            let db =
                db.ok_or_else(|| AppError::Internal("postgres service not configured".into()))?;
            let token = token.ok_or_else(AppError::unauthorized)?;
            db.get_user_by_token(&token)
                .await?
                .map(AuthedUser)
                .ok_or_else(AppError::unauthorized)
        })
    }
}
