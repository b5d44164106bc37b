use account_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use account_api::types::user::RUserRegister;

    pub fn sample_register() -> RUserRegister {
        RUserRegister {
            username: "alice".to_string(),
            password: "pw1".to_string(),
            name: "Alice".to_string(),
        }
    }

    pub fn register_with(username: &str, password: &str, name: &str) -> RUserRegister {
        RUserRegister {
            username: username.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }
    }
}
