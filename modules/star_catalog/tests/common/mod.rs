#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use star_catalog::domain::service::Service;
use star_catalog::infra::storage::migrations::{Migrator, MigratorTrait};
use star_catalog::infra::storage::sea_orm_repo::SeaOrmCatalogRepository;
use star_catalog::infra::upstream::client::SwapiClient;

/// Create a fresh in-memory database with the schema applied. A single
/// pooled connection keeps every query on the same in-memory store.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Upstream client pointed at a wiremock server, page 1, limit 10.
pub fn upstream_client(server: &MockServer) -> SwapiClient {
    SwapiClient::with_client(
        reqwest::Client::new(),
        Url::parse(&server.uri()).expect("mock server uri"),
        1,
        10,
    )
}

/// Same, but with a tight request timeout for timeout-class tests.
pub fn upstream_client_with_timeout(server: &MockServer, timeout: Duration) -> SwapiClient {
    let http = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("build http client");
    SwapiClient::with_client(
        http,
        Url::parse(&server.uri()).expect("mock server uri"),
        1,
        10,
    )
}

/// Domain service over a fresh database, plus the repository handle for
/// direct seeding and assertions.
pub async fn test_service(server: &MockServer) -> (Arc<Service>, Arc<SeaOrmCatalogRepository>) {
    let db = test_db().await;
    let repo = Arc::new(SeaOrmCatalogRepository::new(db));
    let service = Arc::new(Service::new(repo.clone(), Arc::new(upstream_client(server))));
    (service, repo)
}

pub fn person_detail(name: &str) -> serde_json::Value {
    json!({
        "result": {
            "properties": {
                "name": name,
                "height": "172",
                "mass": "77",
                "gender": "male",
                "birth_year": "19BBY"
            }
        }
    })
}

pub fn planet_detail(name: &str) -> serde_json::Value {
    json!({
        "result": {
            "properties": {
                "name": name,
                "climate": "arid",
                "population": "200000",
                "terrain": "desert"
            }
        }
    })
}

/// Mount a people listing plus one detail mock per name.
pub async fn mount_people(server: &MockServer, names: &[&str]) {
    let results: Vec<_> = (1..=names.len())
        .map(|i| json!({ "url": format!("{}/people/{i}", server.uri()) }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/people"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(server)
        .await;

    for (i, name) in names.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(format!("/people/{}", i + 1)))
            .respond_with(ResponseTemplate::new(200).set_body_json(person_detail(name)))
            .mount(server)
            .await;
    }
}

/// Mount a planet listing plus one detail mock per name.
pub async fn mount_planets(server: &MockServer, names: &[&str]) {
    let results: Vec<_> = (1..=names.len())
        .map(|i| json!({ "url": format!("{}/planets/{i}", server.uri()) }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/planets"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(server)
        .await;

    for (i, name) in names.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(format!("/planets/{}", i + 1)))
            .respond_with(ResponseTemplate::new(200).set_body_json(planet_detail(name)))
            .mount(server)
            .await;
    }
}
