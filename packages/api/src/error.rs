use thiserror::Error;

use store::StoreError;

/// Failures talking to the users collaborator.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("collaborator responded with status {0}")]
    Status(u16),

    #[error("could not decode collaborator response: {0}")]
    Decode(String),
}

/// Outcome of a failed login or signup. `Display` is the message shown on the form.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter your {0}")]
    MissingField(&'static str),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Failed to create account")]
    CreateFailed,

    #[error("Failed to connect to server")]
    Connection(#[source] DirectoryError),

    #[error("Failed to save session")]
    Session(#[source] StoreError),
}

/// Failures saving profile edits.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Please enter your name")]
    MissingName,

    #[error("You are signed out. Please sign in again.")]
    NoSession,

    #[error("Failed to save profile")]
    Store(#[from] StoreError),
}
