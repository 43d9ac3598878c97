use serde::{Deserialize, Serialize};

use crate::contract::model::{FavoriteKind, FavoriteView, Person, Planet, User};

/// REST DTO for a person, full-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

/// REST DTO for a planet, full-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

/// REST DTO for a user. The contract model carries no password, so this
/// cannot leak one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKindDto {
    Person,
    Planet,
}

/// REST DTO for a favorite: `{id, kind, name}` with the referenced
/// entity's name resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub kind: FavoriteKindDto,
    pub name: String,
}

/// Response for the population endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReportDto {
    pub message: String,
    pub imported: u64,
}

// Conversion implementations between contract models and REST DTOs

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            mass: person.mass,
            gender: person.gender,
            birth_year: person.birth_year,
        }
    }
}

impl From<Planet> for PlanetDto {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            population: planet.population,
            terrain: planet.terrain,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<FavoriteKind> for FavoriteKindDto {
    fn from(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::Person => Self::Person,
            FavoriteKind::Planet => Self::Planet,
        }
    }
}

impl From<FavoriteView> for FavoriteDto {
    fn from(view: FavoriteView) -> Self {
        Self {
            id: view.id,
            kind: view.kind.into(),
            name: view.name,
        }
    }
}
