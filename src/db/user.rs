use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserRegister};
use crate::utils::token;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Session lookup: the token column is the only credential checked here.
    pub async fn get_user_by_token(&self, token: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Token.eq(token))
            .one(&self.db)
            .await?)
    }

    /// Signup: create user. The existence check is a fast path; the unique
    /// index on username catches the race and comes back as the same conflict.
    pub async fn create_user(&self, payload: DBUserRegister) -> Result<UserModel, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::duplicate_username());
        }
        let now = Utc::now();
        let user = UserActive {
            id: Set(token::new_id()),
            username: Set(payload.username),
            name: Set(payload.name),
            password: Set(payload.password),
            token: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;
        Ok(user)
    }

    /// Login rotates the token; whatever session existed before is dead.
    pub async fn set_user_token(
        &self,
        user: UserModel,
        token: &str,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        am.token = Set(Some(token.to_string()));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    /// Partial update: only the supplied fields change. `password` must
    /// already be hashed by the caller.
    pub async fn update_user_profile(
        &self,
        user: UserModel,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<UserModel, AppError> {
        let mut am: UserActive = user.into();
        if let Some(name) = name {
            am.name = Set(name);
        }
        if let Some(password) = password {
            am.password = Set(password);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }
}
