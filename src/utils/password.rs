use crate::types::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

pub fn hash(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let digest = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(digest.to_string())
}

pub fn verify(plain: &str, digest: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(digest)?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

// argon2 is CPU-bound, keep it off the actix worker threads

pub async fn hash_blocking(plain: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash(&plain))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

pub async fn verify_blocking(plain: String, digest: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify(&plain, &digest))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(format!("password verification failed: {e}")))
}
