use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RUserRegister {
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RUserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RUserUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// What a user looks like on the wire. The password digest never leaves the
/// server; the token only rides along on login responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRes {
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserRes {
    pub fn from_model(user: &UserModel) -> Self {
        UserRes {
            username: user.username.clone(),
            name: user.name.clone(),
            token: None,
        }
    }

    pub fn with_token(user: &UserModel) -> Self {
        UserRes {
            username: user.username.clone(),
            name: user.name.clone(),
            token: user.token.clone(),
        }
    }
}

/// Insert payload for the credential store; `password` is already hashed.
#[derive(Serialize, Deserialize)]
pub struct DBUserRegister {
    pub username: String,
    pub name: String,
    pub password: String,
}
