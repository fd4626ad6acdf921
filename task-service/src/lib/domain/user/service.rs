use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialHasher;
use auth::TokenService;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserDirectory;
use crate::user::ports::UserServicePort;

const DECOY_PASSWORD: &str = "decoy-password-never-registered";

/// Registration and login flows.
///
/// Concrete implementation of UserServicePort with the directory, hasher and
/// token service injected.
pub struct UserService<UD, CH, TS>
where
    UD: UserDirectory,
    CH: CredentialHasher,
    TS: TokenService,
{
    directory: Arc<UD>,
    hasher: Arc<CH>,
    tokens: Arc<TS>,
    // Compared against on unknown usernames so both login failures cost one hash.
    decoy_hash: String,
}

impl<UD, CH, TS> UserService<UD, CH, TS>
where
    UD: UserDirectory,
    CH: CredentialHasher,
    TS: TokenService,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User storage
    /// * `hasher` - Password hashing implementation
    /// * `tokens` - Access token issuer
    ///
    /// # Errors
    /// * `Password` - The decoy hash used for unknown-user logins could not be computed
    pub fn new(directory: Arc<UD>, hasher: Arc<CH>, tokens: Arc<TS>) -> Result<Self, UserError> {
        let decoy_hash = hasher.hash_password(DECOY_PASSWORD)?;

        Ok(Self {
            directory,
            hasher,
            tokens,
            decoy_hash,
        })
    }

    async fn find_login_user(&self, username: String) -> Result<Option<User>, UserError> {
        match Username::new(username) {
            Ok(username) => self.directory.find_by_username(&username).await,
            Err(_) => Ok(None),
        }
    }
}

#[async_trait]
impl<UD, CH, TS> UserServicePort for UserService<UD, CH, TS>
where
    UD: UserDirectory,
    CH: CredentialHasher,
    TS: TokenService,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        if self
            .directory
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.hasher.hash_password(command.password.expose())?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            password_hash,
            created_at: Utc::now(),
        };

        // The directory re-checks uniqueness under its write lock.
        let created_user = self.directory.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let LoginCommand { username, password } = command;

        let Some(user) = self.find_login_user(username).await? else {
            let _ = self.hasher.compare_passwords(&self.decoy_hash, &password);
            return Err(UserError::InvalidCredentials);
        };

        if !self.hasher.compare_passwords(&user.password_hash, &password) {
            return Err(UserError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.username.as_str())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }
}
