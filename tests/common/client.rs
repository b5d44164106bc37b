use account_api::{
    db::postgres_service::PostgresService,
    types::user::DBUserRegister,
    utils::{password, token},
};
use actix_web::{web, App};
use entity::user::Model as UserModel;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(account_api::routes::configure_routes)
    }

    /// Creates a user straight through the db layer, bypassing HTTP.
    #[allow(dead_code)]
    pub async fn seed_user(&self, username: &str, plaintext: &str, name: &str) -> UserModel {
        let digest = password::hash(plaintext).expect("Failed to hash password");
        self.db
            .create_user(DBUserRegister {
                username: username.to_string(),
                name: name.to_string(),
                password: digest,
            })
            .await
            .expect("Failed to seed user")
    }

    /// Seeds a user and gives it a live session token.
    #[allow(dead_code)]
    pub async fn seed_user_with_token(
        &self,
        username: &str,
        plaintext: &str,
        name: &str,
    ) -> (UserModel, String) {
        let user = self.seed_user(username, plaintext, name).await;
        let session = token::new_token();
        let user = self
            .db
            .set_user_token(user, &session)
            .await
            .expect("Failed to set session token");
        (user, session)
    }
}
