//! Pure catalog models for crossing the module boundary (no serde).
//!
//! The storage layer keeps a password column on its user entity; the
//! contract [`User`] has no such field, so a password can never leave
//! the module through this surface.

/// A person from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

/// Data for a person staged by the importer (id assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

/// A planet from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

/// Data for a planet staged by the importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

/// A registered user. Deliberately carries no password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// Data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// What a favorite points at. Exactly one target per favorite; the
/// neither-nor-both states are unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

/// The kind of entity a favorite references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Person,
    Planet,
}

/// A stored favorite linking a user to one catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Data for creating a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// Read view of a favorite with the referenced entity's name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteView {
    pub id: i32,
    pub kind: FavoriteKind,
    pub name: String,
}
