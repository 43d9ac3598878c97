mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use star_catalog::api::rest::routes;
use star_catalog::contract::model::{FavoriteTarget, NewFavorite, NewUser};
use star_catalog::domain::ports::CallerResolver;
use star_catalog::domain::repo::CatalogRepository;
use star_catalog::domain::service::Service;
use star_catalog::infra::identity::StaticCaller;
use star_catalog::infra::storage::sea_orm_repo::SeaOrmCatalogRepository;

/// HTTP router over a fresh database, with the caller resolved to the
/// given user id.
async fn test_app(
    server: &MockServer,
    caller_id: i32,
) -> (Router, Arc<SeaOrmCatalogRepository>) {
    let db = common::test_db().await;
    let repo = Arc::new(SeaOrmCatalogRepository::new(db));
    let service = Arc::new(Service::new(
        repo.clone(),
        Arc::new(common::upstream_client(server)),
    ));
    let caller: Arc<dyn CallerResolver> = Arc::new(StaticCaller::new(caller_id));
    (routes::router(service, caller), repo)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn missing_person_returns_404_with_error_body() {
    let server = MockServer::start().await;
    let (app, _repo) = test_app(&server, 1).await;

    let (status, body) = get_json(&app, "/people/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Person not found");
}

#[tokio::test]
async fn missing_planet_returns_404_with_error_body() {
    let server = MockServer::start().await;
    let (app, _repo) = test_app(&server, 1).await;

    let (status, body) = get_json(&app, "/planet/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Planet not found");
}

#[tokio::test]
async fn user_listing_never_exposes_a_password() {
    let server = MockServer::start().await;
    let (app, repo) = test_app(&server, 1).await;

    repo.insert_user(NewUser {
        email: "luke@rebellion.example".to_string(),
        password: "secret".to_string(),
        is_active: true,
    })
    .await
    .unwrap();

    let (status, body) = get_json(&app, "/user").await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    let user = users[0].as_object().unwrap();
    assert_eq!(user["email"], "luke@rebellion.example");
    assert_eq!(user["is_active"], true);
    assert!(
        !user.contains_key("password"),
        "password must never be serialized"
    );
}

#[tokio::test]
async fn population_endpoint_imports_and_serves_full_records() {
    let server = MockServer::start().await;
    common::mount_people(&server, &["Luke Skywalker", "Leia Organa"]).await;

    let (app, _repo) = test_app(&server, 1).await;

    let (status, body) = get_json(&app, "/people/population").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "People added successfully");
    assert_eq!(body["imported"], 2);

    let (status, body) = get_json(&app, "/people").await;
    assert_eq!(status, StatusCode::OK);
    let people = body.as_array().unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0]["name"], "Luke Skywalker");
    assert_eq!(people[0]["height"], "172");
    assert_eq!(people[1]["name"], "Leia Organa");

    let first_id = people[0]["id"].as_i64().unwrap();
    let (status, body) = get_json(&app, &format!("/people/{first_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Luke Skywalker");
}

#[tokio::test]
async fn planet_population_endpoint_imports_and_serves_full_records() {
    let server = MockServer::start().await;
    common::mount_planets(&server, &["Tatooine"]).await;

    let (app, _repo) = test_app(&server, 1).await;

    let (status, body) = get_json(&app, "/planet/population").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Planets added successfully");
    assert_eq!(body["imported"], 1);

    let (status, body) = get_json(&app, "/planet").await;
    assert_eq!(status, StatusCode::OK);
    let planets = body.as_array().unwrap();
    assert_eq!(planets[0]["name"], "Tatooine");
    assert_eq!(planets[0]["climate"], "arid");
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    let server = MockServer::start().await;
    // no mocks mounted: the listing fetch comes back as an HTTP error

    let (app, repo) = test_app(&server, 1).await;

    let (status, body) = get_json(&app, "/people/population").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(
        body["error"].as_str().unwrap().contains("upstream"),
        "error body should describe the upstream failure: {body}"
    );

    assert!(repo.list_people().await.unwrap().is_empty());
}

#[tokio::test]
async fn favorites_serialize_as_id_kind_name() {
    let server = MockServer::start().await;
    let (app, repo) = test_app(&server, 1).await;

    repo.insert_people(vec![star_catalog::contract::model::NewPerson {
        name: "Luke Skywalker".to_string(),
        height: None,
        mass: None,
        gender: None,
        birth_year: None,
    }])
    .await
    .unwrap();
    repo.insert_planets(vec![star_catalog::contract::model::NewPlanet {
        name: "Tatooine".to_string(),
        climate: None,
        population: None,
        terrain: None,
    }])
    .await
    .unwrap();

    let owner = repo
        .insert_user(NewUser {
            email: "luke@rebellion.example".to_string(),
            password: "secret".to_string(),
            is_active: true,
        })
        .await
        .unwrap();

    let person_id = repo.list_people().await.unwrap()[0].id;
    let planet_id = repo.list_planets().await.unwrap()[0].id;
    repo.insert_favorite(NewFavorite {
        user_id: owner.id,
        target: FavoriteTarget::Person(person_id),
    })
    .await
    .unwrap();
    repo.insert_favorite(NewFavorite {
        user_id: owner.id,
        target: FavoriteTarget::Planet(planet_id),
    })
    .await
    .unwrap();

    let (status, body) = get_json(&app, "/user/favorites").await;
    assert_eq!(status, StatusCode::OK);

    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["kind"], "person");
    assert_eq!(favorites[0]["name"], "Luke Skywalker");
    assert_eq!(favorites[1]["kind"], "planet");
    assert_eq!(favorites[1]["name"], "Tatooine");
    assert!(favorites[0]["id"].is_i64());
}

#[tokio::test]
async fn favorites_for_an_unknown_caller_return_404() {
    let server = MockServer::start().await;
    let (app, _repo) = test_app(&server, 99).await;

    let (status, body) = get_json(&app, "/user/favorites").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}
