use async_trait::async_trait;

use crate::contract::model::{NewPerson, NewPlanet};
use crate::domain::error::{DomainError, UpstreamError};

/// Port for the external catalog source the importer pulls from.
///
/// A fetch resolves the configured listing page and every per-item detail
/// record before returning; implementations perform no writes, so a failed
/// fetch leaves the store untouched by construction.
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Fetch one page of people with their detail attributes resolved.
    async fn fetch_people(&self) -> Result<Vec<NewPerson>, UpstreamError>;
    /// Fetch one page of planets with their detail attributes resolved.
    async fn fetch_planets(&self) -> Result<Vec<NewPlanet>, UpstreamError>;
}

/// Port for resolving the current caller's user id.
///
/// Replaces a hardcoded user id at the request boundary; not tied to any
/// particular auth technology.
#[async_trait]
pub trait CallerResolver: Send + Sync {
    async fn current_user(&self) -> Result<i32, DomainError>;
}
