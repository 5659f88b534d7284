use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument, warn};

use super::domain::{Account, AuthSession, Claims, LoginInput, NewAccount, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;
use crate::matching::TextMatch;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub email_match: TextMatch,
}

impl AuthConfig {
    pub fn from_settings(settings: &configs::AuthSettings) -> Self {
        let ttl_secs = i64::try_from(settings.token_ttl_secs).unwrap_or(i64::MAX);
        Self {
            jwt_secret: settings.jwt_secret.clone(),
            token_ttl: Duration::try_seconds(ttl_secs).unwrap_or(Duration::hours(1)),
            email_match: settings.email_match,
        }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new account with a hashed password.
    ///
    /// The duplicate check and the insert are separate statements; two
    /// concurrent registrations for one email can both succeed.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use service::matching::TextMatch;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let cfg = AuthConfig { jwt_secret: "secret".into(), token_ttl: chrono::Duration::hours(1), email_match: TextMatch::Exact };
    /// let svc = AuthService::new(repo, cfg);
    /// let input = RegisterInput { email: "user@example.com".into(), username: "Test".into(), password: "Secret123".into() };
    /// let account = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(account.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<Account, AuthError> {
        if self.repo.find_by_email(&input.email, self.cfg.email_match).await?.is_some() {
            debug!("email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        let created_at = Utc::now();
        let password_hash = hash_password(&input.password)?;
        let account = self.repo
            .create_account(NewAccount { username: input.username, email: input.email, password_hash, created_at })
            .await?;
        info!(account_id = account.id, email = %account.email, "account_registered");
        Ok(account)
    }

    /// Verify credentials and mint a signed token.
    ///
    /// Unknown email, wrong password and an unreadable stored hash all yield
    /// [`AuthError::InvalidCredentials`].
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::{RegisterInput, LoginInput};
    /// use service::matching::TextMatch;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let cfg = AuthConfig { jwt_secret: "secret".into(), token_ttl: chrono::Duration::hours(1), email_match: TextMatch::Exact };
    /// let svc = AuthService::new(repo, cfg);
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { email: "u@e.com".into(), username: "N".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.account.email, "u@e.com");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let creds = match self.repo.find_by_email(&input.email, self.cfg.email_match).await? {
            Some(c) => c,
            None => {
                debug!("no account for email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let parsed = match PasswordHash::new(&creds.password_hash) {
            Ok(p) => p,
            Err(e) => {
                warn!(account_id = creds.account.id, error = %e, "stored password hash unreadable");
                return Err(AuthError::InvalidCredentials);
            }
        };
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            debug!(account_id = creds.account.id, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let (token, expires_at) = self.issue_token(&creds.account)?;
        info!(account_id = creds.account.id, "account_logged_in");
        Ok(AuthSession { account: creds.account, token, expires_at })
    }

    /// Decode and validate a token minted by [`AuthService::login`].
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let key = DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "token rejected");
                AuthError::InvalidToken
            })
    }

    fn issue_token(&self, account: &Account) -> Result<(String, DateTime<Utc>), AuthError> {
        let now = Utc::now();
        let expires_at = now + self.cfg.token_ttl;
        let claims = Claims {
            sub: account.email.clone(),
            name: account.email.clone(),
            username: account.username.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(
            &JwtHeader::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok((token, expires_at))
    }
}

/// Argon2id PHC string with a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}
