use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure to read or parse `config.json`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Failure to open the promotions source. Row-level problems never end up
/// here; they are logged and skipped by the loader.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open promotions file {path}: {source}")]
    Open { path: String, source: io::Error },
}

/// Anything that stops the service from reaching the serving phase.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },

    #[error("server error: {0}")]
    Serve(io::Error),
}

/// Per-request failures of the lookup endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("promotion not found")]
    NotFound,

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Serialization(e) => {
                tracing::error!(error = %e, "failed to serialize promotion");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
