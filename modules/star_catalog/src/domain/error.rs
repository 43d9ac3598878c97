use thiserror::Error;

/// Failures while talking to the external catalog API.
///
/// These are recoverable, typed classes rather than uncaught key-lookup
/// panics: transport problems, bounded-timeout expiry, and payloads that
/// do not match the expected envelope are distinguished so callers can
/// map them to distinct responses.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request to {url} failed: {message}")]
    Unavailable { url: String, message: String },

    #[error("upstream request to {url} timed out")]
    Timeout { url: String },

    #[error("upstream payload from {url} did not match the expected schema: {message}")]
    Schema { url: String, message: String },
}

impl UpstreamError {
    pub fn unavailable(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    pub fn schema(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Domain-specific errors using thiserror.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Person not found: {id}")]
    PersonNotFound { id: i32 },

    #[error("Planet not found: {id}")]
    PlanetNotFound { id: i32 },

    #[error("User not found: {id}")]
    UserNotFound { id: i32 },

    #[error("User with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn person_not_found(id: i32) -> Self {
        Self::PersonNotFound { id }
    }

    pub fn planet_not_found(id: i32) -> Self {
        Self::PlanetNotFound { id }
    }

    pub fn user_not_found(id: i32) -> Self {
        Self::UserNotFound { id }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
