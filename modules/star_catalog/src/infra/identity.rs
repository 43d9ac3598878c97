use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::ports::CallerResolver;

/// Caller resolver that always answers with a configured user id.
/// Stands in for a session mechanism that does not exist yet.
pub struct StaticCaller {
    user_id: i32,
}

impl StaticCaller {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl CallerResolver for StaticCaller {
    async fn current_user(&self) -> Result<i32, DomainError> {
        Ok(self.user_id)
    }
}
