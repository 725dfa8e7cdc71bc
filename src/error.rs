use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading the startup spreadsheet.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open spreadsheet {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("spreadsheet {} has no worksheet", path.display())]
    MissingWorksheet { path: PathBuf },

    #[error("failed to read the first worksheet")]
    Worksheet(#[source] calamine::Error),

    /// Row and column are 1-based, as shown by spreadsheet applications.
    #[error("row {row}, column {column}: expected {expected}, found {found}")]
    Cell {
        row: u32,
        column: u32,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure while changing the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record ids are exhausted")]
    IdsExhausted,
}

/// Failure inside the HTTP layer that is not the caller's fault.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("mediator error: {0}")]
    Mediator(#[from] mediator::error::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("mediator is unavailable")]
    MediatorPoisoned,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("{}", self);
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
