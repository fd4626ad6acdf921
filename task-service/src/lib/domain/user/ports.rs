use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for registration and login.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated username and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Verify a credential pair and issue an access token.
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password (indistinguishable)
    /// * `Token` - Token issuance failed
    async fn login(&self, command: LoginCommand) -> Result<String, UserError>;
}

/// Keyed store of registered users.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Insert `user` unless the username is already present.
    ///
    /// At most one concurrent call per username succeeds.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
