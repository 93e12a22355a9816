#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use users_api::api::handlers::{
    create_user_handler, delete_user_handler, health_handler, list_users_handler,
    patch_user_handler, replace_user_handler,
};
use users_api::application::services::UserService;
use users_api::domain::entities::{NewUser, User};
use users_api::domain::repositories::UserRepository;
use users_api::infrastructure::persistence::InMemoryUserRepository;
use users_api::state::AppState;

/// A well-formed ObjectId that matches no stored document.
pub const FAKE_USER_ID: &str = "012345678901234567890123";

pub fn create_test_state() -> (AppState, Arc<InMemoryUserRepository>) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(UserService::new(repository.clone()));
    (state, repository)
}

pub fn make_server() -> (TestServer, Arc<InMemoryUserRepository>) {
    let (state, repository) = create_test_state();

    let app = Router::new()
        .route(
            "/users",
            get(list_users_handler)
                .post(create_user_handler)
                .patch(patch_user_handler)
                .put(replace_user_handler)
                .delete(delete_user_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

pub async fn seed_user(repository: &InMemoryUserRepository, name: &str, age: i64) -> User {
    let user = User::create(NewUser {
        name: name.to_string(),
        age,
    });
    repository.insert(&user).await.unwrap();
    user
}

/// Asserts the store holds exactly these `(name, age)` pairs, in order.
pub async fn assert_store_state(repository: &InMemoryUserRepository, expected: &[(&str, i64)]) {
    let users = repository.find_all().await.unwrap();
    let actual: Vec<(String, i64)> = users.into_iter().map(|u| (u.name, u.age)).collect();
    let expected: Vec<(String, i64)> = expected
        .iter()
        .map(|(name, age)| (name.to_string(), *age))
        .collect();
    assert_eq!(actual, expected);
}
