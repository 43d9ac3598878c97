use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{
    Favorite, FavoriteTarget, FavoriteView, NewFavorite, NewUser, Person, Planet, User,
};
use crate::domain::error::DomainError;
use crate::domain::ports::UpstreamSource;
use crate::domain::repo::CatalogRepository;

/// Domain service with the import and read rules for the catalog.
/// Depends only on the repository and upstream ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn CatalogRepository>,
    upstream: Arc<dyn UpstreamSource>,
}

impl Service {
    pub fn new(repo: Arc<dyn CatalogRepository>, upstream: Arc<dyn UpstreamSource>) -> Self {
        Self { repo, upstream }
    }

    /// Import one upstream page of people.
    ///
    /// Fetch phase first (no writes), then a single batch commit. Each call
    /// appends a fresh batch; the operation is deliberately not idempotent.
    #[instrument(name = "star_catalog.service.import_people", skip(self))]
    pub async fn import_people(&self) -> Result<u64, DomainError> {
        info!("Importing people from upstream");

        let batch = self.upstream.fetch_people().await?;
        let staged = batch.len();

        let imported = self
            .repo
            .insert_people(batch)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(staged, imported, "People batch committed");
        Ok(imported)
    }

    /// Import one upstream page of planets. Same shape as people.
    #[instrument(name = "star_catalog.service.import_planets", skip(self))]
    pub async fn import_planets(&self) -> Result<u64, DomainError> {
        info!("Importing planets from upstream");

        let batch = self.upstream.fetch_planets().await?;
        let staged = batch.len();

        let imported = self
            .repo
            .insert_planets(batch)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(staged, imported, "Planet batch committed");
        Ok(imported)
    }

    #[instrument(name = "star_catalog.service.list_people", skip(self))]
    pub async fn list_people(&self) -> Result<Vec<Person>, DomainError> {
        self.repo
            .list_people()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "star_catalog.service.get_person", skip(self), fields(person_id = id))]
    pub async fn get_person(&self, id: i32) -> Result<Person, DomainError> {
        self.repo
            .find_person(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::person_not_found(id))
    }

    #[instrument(name = "star_catalog.service.list_planets", skip(self))]
    pub async fn list_planets(&self) -> Result<Vec<Planet>, DomainError> {
        self.repo
            .list_planets()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "star_catalog.service.get_planet", skip(self), fields(planet_id = id))]
    pub async fn get_planet(&self, id: i32) -> Result<Planet, DomainError> {
        self.repo
            .find_planet(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::planet_not_found(id))
    }

    #[instrument(name = "star_catalog.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo
            .list_users()
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Favorites owned by the given user, names resolved.
    /// Fails with not-found when the user does not exist.
    #[instrument(name = "star_catalog.service.favorites_for", skip(self))]
    pub async fn favorites_for(&self, user_id: i32) -> Result<Vec<FavoriteView>, DomainError> {
        self.require_user(user_id).await?;

        self.repo
            .favorites_for_user(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Create a user. Not exposed over HTTP; used by seeding and tests.
    #[instrument(name = "star_catalog.service.create_user", skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        if new_user.email.trim().is_empty() {
            return Err(DomainError::validation("email", "must not be empty"));
        }
        if new_user.password.is_empty() {
            return Err(DomainError::validation("password", "must not be empty"));
        }

        if self
            .repo
            .email_exists(&new_user.email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::email_already_exists(new_user.email));
        }

        let user = self
            .repo
            .insert_user(new_user)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!(user_id = user.id, "Created user");
        Ok(user)
    }

    /// Favorite a catalog entity for a user. The target enum means a
    /// favorite always references exactly one of person or planet.
    #[instrument(name = "star_catalog.service.add_favorite", skip(self))]
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, DomainError> {
        self.require_user(user_id).await?;

        match target {
            FavoriteTarget::Person(id) => {
                self.get_person(id).await?;
            }
            FavoriteTarget::Planet(id) => {
                self.get_planet(id).await?;
            }
        }

        let favorite = self
            .repo
            .insert_favorite(NewFavorite { user_id, target })
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!(favorite_id = favorite.id, "Added favorite");
        Ok(favorite)
    }

    async fn require_user(&self, user_id: i32) -> Result<User, DomainError> {
        self.repo
            .find_user(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(user_id))
    }
}
