use async_trait::async_trait;

use crate::contract::model::{
    Favorite, FavoriteView, NewFavorite, NewPerson, NewPlanet, NewUser, Person, Planet, User,
};

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a staged batch of people in one transaction.
    ///
    /// All-or-nothing: any failure rolls the whole batch back. Returns the
    /// number of rows committed.
    async fn insert_people(&self, batch: Vec<NewPerson>) -> anyhow::Result<u64>;
    /// Insert a staged batch of planets in one transaction.
    async fn insert_planets(&self, batch: Vec<NewPlanet>) -> anyhow::Result<u64>;

    /// All people, ordered by id.
    async fn list_people(&self) -> anyhow::Result<Vec<Person>>;
    /// Load a person by id.
    async fn find_person(&self, id: i32) -> anyhow::Result<Option<Person>>;
    /// All planets, ordered by id.
    async fn list_planets(&self) -> anyhow::Result<Vec<Planet>>;
    /// Load a planet by id.
    async fn find_planet(&self, id: i32) -> anyhow::Result<Option<Planet>>;

    /// All users, ordered by id.
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
    /// Load a user by id.
    async fn find_user(&self, id: i32) -> anyhow::Result<Option<User>>;
    /// Check uniqueness by email.
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
    /// Insert a user; the store assigns the id.
    async fn insert_user(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Insert a favorite; the target enum guarantees exactly one reference.
    async fn insert_favorite(&self, new_favorite: NewFavorite) -> anyhow::Result<Favorite>;
    /// Favorites owned by a user with the referenced names resolved.
    async fn favorites_for_user(&self, user_id: i32) -> anyhow::Result<Vec<FavoriteView>>;
}
