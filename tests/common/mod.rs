#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use shortly::application::services::{UrlService, UrlServiceConfig};
use shortly::domain::entities::UrlRecord;
use shortly::infrastructure::persistence::MemoryUrlRepository;
use shortly::routes::router;
use shortly::state::AppState;

pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repository, UrlServiceConfig::default()));

    AppState::new(url_service)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_link(state: &AppState, url: &str) -> UrlRecord {
    state.url_service.create(url, None).await.unwrap()
}

pub async fn create_expired_link(state: &AppState, url: &str) -> UrlRecord {
    state.url_service.create(url, Some(-1)).await.unwrap()
}
