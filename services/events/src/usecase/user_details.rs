use crate::domain::repository::{UserRepository, UserRoleRepository};
use crate::domain::types::User;
use crate::error::EventsServiceError;

/// Resolves a login name (the email) to a principal with its roles attached.
pub struct LoadUserByUsernameUseCase<U: UserRepository, R: UserRoleRepository> {
    pub users: U,
    pub user_roles: R,
}

impl<U: UserRepository, R: UserRoleRepository> LoadUserByUsernameUseCase<U, R> {
    pub async fn execute(&self, username: &str) -> Result<User, EventsServiceError> {
        let Some(user) = self.users.find_by_email(username).await? else {
            tracing::warn!(username, "email not found");
            return Err(EventsServiceError::UsernameNotFound);
        };
        let roles = self.user_roles.find_roles_by_user_id(user.id).await?;
        tracing::debug!(username, roles = roles.len(), "user found");
        Ok(user.with_roles(roles))
    }
}
