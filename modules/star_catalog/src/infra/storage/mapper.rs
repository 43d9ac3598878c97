//! Entity to contract conversions. The user mapping is where the
//! password column is dropped before anything crosses the boundary.

use anyhow::bail;

use crate::contract::model::{Favorite, FavoriteTarget, Person, Planet, User};
use crate::infra::storage::entity::{favorite, person, planet, user};

pub fn person_to_contract(entity: person::Model) -> Person {
    Person {
        id: entity.id,
        name: entity.name,
        height: entity.height,
        mass: entity.mass,
        gender: entity.gender,
        birth_year: entity.birth_year,
    }
}

pub fn planet_to_contract(entity: planet::Model) -> Planet {
    Planet {
        id: entity.id,
        name: entity.name,
        climate: entity.climate,
        population: entity.population,
        terrain: entity.terrain,
    }
}

pub fn user_to_contract(entity: user::Model) -> User {
    User {
        id: entity.id,
        email: entity.email,
        is_active: entity.is_active,
    }
}

/// The nullable FK pair collapses into the target enum; a row violating
/// the exactly-one invariant cannot be represented and is reported as
/// corruption.
pub fn favorite_to_contract(entity: favorite::Model) -> anyhow::Result<Favorite> {
    let target = match (entity.person_id, entity.planet_id) {
        (Some(person_id), None) => FavoriteTarget::Person(person_id),
        (None, Some(planet_id)) => FavoriteTarget::Planet(planet_id),
        _ => bail!(
            "favorite {} must reference exactly one of person or planet",
            entity.id
        ),
    };

    Ok(Favorite {
        id: entity.id,
        user_id: entity.user_id,
        target,
    })
}
