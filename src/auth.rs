use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bcrypt::DEFAULT_COST;
use tower_sessions::Session;

use crate::error::AppError;
use crate::store::{SiteConfig, Store};

const ADMIN_FLAG_KEY: &str = "admin";

/// Fallback credential when neither the environment nor `config.json`
/// provides one. Matches the password shipped with the original site.
const DEFAULT_ADMIN_PASSWORD: &str = "keyproduction2024";

/// Extractor that admits a request only when the server-side session was
/// marked as admin by a successful login. The cookie value alone proves
/// nothing; the flag lives in the session store.
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        if is_admin(&session).await? {
            Ok(AdminSession)
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

pub async fn is_admin(session: &Session) -> Result<bool, tower_sessions::session::Error> {
    Ok(session.get::<bool>(ADMIN_FLAG_KEY).await?.unwrap_or(false))
}

pub async fn login_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(ADMIN_FLAG_KEY, true).await
}

pub async fn logout_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// Resolve the stored admin credential as a bcrypt hash.
///
/// Order: `ADMIN_PASSWORD_HASH` env (pre-hashed, see the `hash-password`
/// bin), then `ADMIN_PASSWORD` env (plaintext, hashed here), then the hash
/// persisted in `config.json`, then the built-in default.
fn resolved_password_hash(store: &Store) -> Result<String, bcrypt::BcryptError> {
    if let Ok(hash) = std::env::var("ADMIN_PASSWORD_HASH") {
        return Ok(hash);
    }
    if let Ok(plain) = std::env::var("ADMIN_PASSWORD") {
        return bcrypt::hash(&plain, DEFAULT_COST);
    }
    if let Some(hash) = store.config().admin_password_hash {
        return Ok(hash);
    }
    bcrypt::hash(DEFAULT_ADMIN_PASSWORD, DEFAULT_COST)
}

pub fn verify_admin_password(store: &Store, candidate: &str) -> Result<bool, bcrypt::BcryptError> {
    let hash = resolved_password_hash(store)?;
    bcrypt::verify(candidate, &hash)
}

/// Persist a new admin password as a bcrypt hash in `config.json`.
///
/// An `ADMIN_PASSWORD`/`ADMIN_PASSWORD_HASH` environment override still
/// wins over the persisted hash on subsequent logins.
pub fn set_admin_password(store: &Store, new_password: &str) -> Result<(), AppError> {
    let hash = bcrypt::hash(new_password, DEFAULT_COST)?;
    store.save_config(&SiteConfig {
        admin_password_hash: Some(hash),
    })?;
    Ok(())
}
