//! # Login and signup
//!
//! Each form moves through [`AuthPhase`]: `Idle → Submitting → Authenticated | Failed`.
//! [`login`] and [`signup`] do the collaborator round trip and, on success, write the
//! returned record to the [`SessionStore`]. The caller navigates to the dashboard on
//! `Ok` and shows the error's `Display` text on `Err`.
//!
//! Password matching is the collaborator's query; this module never compares
//! passwords itself.

use store::{Credentials, KeyValueStore, NewUser, SessionStore, StoreError, UserRecord};
use tracing::{error, info, warn};

use crate::directory::UserDirectory;
use crate::error::{AuthError, DirectoryError};

/// State of a login or signup form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthPhase {
    #[default]
    Idle,
    Submitting,
    Authenticated(UserRecord),
    Failed(String),
}

impl AuthPhase {
    /// Enter `Submitting`. Returns `false` if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = AuthPhase::Submitting;
        true
    }

    /// Record the outcome of a submission.
    pub fn finish(&mut self, result: Result<UserRecord, AuthError>) {
        *self = match result {
            Ok(user) => AuthPhase::Authenticated(user),
            Err(e) => AuthPhase::Failed(e.to_string()),
        };
    }

    /// A field was edited; a failed form goes back to `Idle` and drops its message.
    pub fn edit(&mut self) {
        if matches!(self, AuthPhase::Failed(_)) {
            *self = AuthPhase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, AuthPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}

fn connection(e: DirectoryError) -> AuthError {
    error!("users collaborator unreachable: {e}");
    AuthError::Connection(e)
}

fn persist<S: KeyValueStore>(
    session: &SessionStore<S>,
    user: UserRecord,
) -> Result<UserRecord, AuthError> {
    session.save(&user).map_err(|e| {
        warn!("failed to persist session: {e}");
        AuthError::Session(e)
    })?;
    Ok(user)
}

/// Sign in with email and password.
///
/// The first record the collaborator matches becomes the session.
pub async fn login<D, S>(
    directory: &D,
    session: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<UserRecord, AuthError>
where
    D: UserDirectory,
    S: KeyValueStore,
{
    let email = credentials.email.trim();
    require(email, "email")?;
    require(&credentials.password, "password")?;

    let users = directory
        .find_by_credentials(email, &credentials.password)
        .await
        .map_err(connection)?;

    let Some(user) = users.into_iter().next() else {
        warn!(email, "login rejected");
        return Err(AuthError::InvalidCredentials);
    };

    let user = persist(session, user)?;
    info!(email, "logged in");
    Ok(user)
}

/// Register a new account and sign in as it.
///
/// Nothing is created when the email is already registered.
pub async fn signup<D, S>(
    directory: &D,
    session: &SessionStore<S>,
    form: &NewUser,
) -> Result<UserRecord, AuthError>
where
    D: UserDirectory,
    S: KeyValueStore,
{
    require(&form.name, "name")?;
    require(&form.email, "email")?;
    require(&form.password, "password")?;

    let new_user = NewUser {
        email: form.email.trim().to_string(),
        ..form.clone()
    };

    let existing = directory
        .find_by_email(&new_user.email)
        .await
        .map_err(connection)?;
    if !existing.is_empty() {
        warn!(email = %new_user.email, "signup rejected, email already registered");
        return Err(AuthError::EmailTaken);
    }

    let user = match directory.create(&new_user).await {
        Ok(user) => user,
        Err(DirectoryError::Status(status)) => {
            warn!(status, "collaborator refused to create user");
            return Err(AuthError::CreateFailed);
        }
        Err(e) => return Err(connection(e)),
    };

    let user = persist(session, user)?;
    info!(email = %user.email, role = user.role.as_str(), "account created");
    Ok(user)
}

/// Sign out by removing the persisted session.
pub fn logout<S: KeyValueStore>(session: &SessionStore<S>) -> Result<(), StoreError> {
    session.clear()?;
    info!("logged out");
    Ok(())
}
