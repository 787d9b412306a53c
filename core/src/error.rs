//! Error types for the trip API client.
//!
//! # Design
//! `ApiError` is what a single round-trip can produce. `NotFound` and
//! `Unauthorized` get dedicated variants because a delete against a stale id
//! and a wrong password are the two failures users actually hit; every other
//! non-2xx lands in `HttpError` with the raw status and body.
//!
//! `ControllerError` is the user-facing split: a failed load is rendered in
//! place, a failed mutation is alerted.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `TripClient` parse methods and transports.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("unauthorized: check the API credentials")]
    Unauthorized,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
}

/// The mutating action that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Delete,
}

impl Mutation {
    /// Alert text shown when the server rejects the action.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Mutation::Create => {
                "Erro ao adicionar viagem. Verifique se a API está rodando e as credenciais estão corretas."
            }
            Mutation::Delete => "Erro ao deletar viagem.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("failed to load trips: {0}")]
    LoadFailure(#[source] ApiError),

    #[error("{}", .action.failure_message())]
    MutationFailure {
        action: Mutation,
        #[source]
        source: ApiError,
    },
}

impl ControllerError {
    /// Text for the blocking alert. Transport failures show the transport
    /// message; rejected requests show the fixed per-action message.
    pub fn alert_message(&self) -> String {
        match self {
            ControllerError::LoadFailure(err) => err.to_string(),
            ControllerError::MutationFailure {
                source: ApiError::Transport(err),
                ..
            } => err.to_string(),
            ControllerError::MutationFailure { action, .. } => action.failure_message().to_string(),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {0:?}: expected an http:// or https:// url with a host")]
    InvalidBaseUrl(String),
}
