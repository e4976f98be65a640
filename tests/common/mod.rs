#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use users_api::application::services::UserService;
use users_api::domain::entities::{NewUser, UpdateUser, User};
use users_api::domain::repositories::UserRepository;
use users_api::error::AppError;
use users_api::routes::app_router;
use users_api::state::AppState;

/// In-process stand-in for PostgreSQL with the same id and ordering rules.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<BTreeMap<i64, User>>,
    next_id: Mutex<i64>,
    /// When set, every call fails like a lost database connection.
    pub broken: bool,
    /// Added to every `list` call, to exercise the request timeout.
    pub list_delay: Duration,
}

impl InMemoryUserRepository {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn slow(list_delay: Duration) -> Self {
        Self {
            list_delay,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.broken {
            return Err(AppError::from(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let user = User::new(*next_id, new_user.name, new_user.dob);
        self.rows.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check()?;
        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: i64, update: UpdateUser) -> Result<Option<User>, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|user| {
            user.name = update.name;
            user.dob = update.dob;
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub fn create_test_state(repo: InMemoryUserRepository) -> AppState {
    let user_service = Arc::new(UserService::new(Arc::new(repo)));
    AppState::new(user_service)
}

/// Full application router (middleware included) over an empty in-memory store.
pub fn make_server() -> TestServer {
    make_server_with(InMemoryUserRepository::default())
}

pub fn make_server_with(repo: InMemoryUserRepository) -> TestServer {
    make_server_with_timeout(repo, Duration::from_secs(5))
}

pub fn make_server_with_timeout(repo: InMemoryUserRepository, timeout: Duration) -> TestServer {
    let app = app_router(create_test_state(repo), timeout);
    TestServer::new(app).unwrap()
}
