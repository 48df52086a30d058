//! Shared fixtures for shelter-axum integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use shelter_axum::{AxumContext, CorsConfig, create_router};
use shelter_core::ports::{MockBreedRepository, MockDogRepository};
use shelter_core::{AppCore, BreedRef, Dog, DogRow, Repos};

/// Build a valid dog the way a repository would hand it back.
pub fn dog(id: i64, name: &str, breed: Option<(i64, &str)>, status: Option<&str>) -> Dog {
    Dog::try_from(DogRow {
        id,
        name: name.to_string(),
        breed: breed.map(|(breed_id, breed_name)| BreedRef {
            id: breed_id,
            name: breed_name.to_string(),
        }),
        age: 3,
        gender: "Male".to_string(),
        description: None,
        status: status.map(str::to_string),
        intake_date: Utc::now(),
        adoption_date: None,
    })
    .unwrap()
}

/// Router over a mocked dog repository; the breed repository is never called.
pub fn router_with_dogs(dogs: MockDogRepository) -> Router {
    let repos = Repos::new(Arc::new(dogs), Arc::new(MockBreedRepository::new()));
    create_router(AxumContext::new(AppCore::new(repos)), &CorsConfig::AllowAll)
}

/// Issue a GET and return the status with the raw body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Issue a GET and decode the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
