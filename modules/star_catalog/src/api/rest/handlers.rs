use std::sync::Arc;

use axum::{extract::Path, response::Json, Extension};
use tracing::info;

use crate::api::rest::dto::{FavoriteDto, ImportReportDto, PersonDto, PlanetDto, UserDto};
use crate::api::rest::error::ApiError;
use crate::domain::ports::CallerResolver;
use crate::domain::service::Service;

/// Trigger the people import from the external source.
pub async fn import_people(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<ImportReportDto>, ApiError> {
    info!("People population requested");

    let imported = svc.import_people().await?;
    Ok(Json(ImportReportDto {
        message: "People added successfully".to_string(),
        imported,
    }))
}

/// Trigger the planet import from the external source.
pub async fn import_planets(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<ImportReportDto>, ApiError> {
    info!("Planet population requested");

    let imported = svc.import_planets().await?;
    Ok(Json(ImportReportDto {
        message: "Planets added successfully".to_string(),
        imported,
    }))
}

/// List all people.
pub async fn list_people(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<PersonDto>>, ApiError> {
    let people = svc.list_people().await?;
    Ok(Json(people.into_iter().map(PersonDto::from).collect()))
}

/// Get a specific person by id.
pub async fn get_person(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<PersonDto>, ApiError> {
    let person = svc.get_person(id).await?;
    Ok(Json(person.into()))
}

/// List all planets.
pub async fn list_planets(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<PlanetDto>>, ApiError> {
    let planets = svc.list_planets().await?;
    Ok(Json(planets.into_iter().map(PlanetDto::from).collect()))
}

/// Get a specific planet by id.
pub async fn get_planet(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<PlanetDto>, ApiError> {
    let planet = svc.get_planet(id).await?;
    Ok(Json(planet.into()))
}

/// List all users (id and email only; passwords never cross the contract).
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = svc.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// List the favorites of the resolved caller.
pub async fn list_user_favorites(
    Extension(svc): Extension<Arc<Service>>,
    Extension(caller): Extension<Arc<dyn CallerResolver>>,
) -> Result<Json<Vec<FavoriteDto>>, ApiError> {
    let user_id = caller.current_user().await?;
    info!(user_id, "Listing favorites for caller");

    let favorites = svc.favorites_for(user_id).await?;
    Ok(Json(favorites.into_iter().map(FavoriteDto::from).collect()))
}
