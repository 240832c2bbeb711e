use log::error;
use thiserror::Error;

use crate::models::JobStatus;
use crate::store::StoreError;
use crate::utils::ApiError;

/// Typed failures surfaced by the marketplace core. The HTTP layer maps
/// each variant onto exactly one status code.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("cannot {action} a job that is {status}")]
    InvalidTransition {
        action: &'static str,
        status: JobStatus,
    },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<MarketError> for ApiError {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::NotFound(_) => ApiError::not_found(err.to_string()),
            MarketError::InvalidTransition { .. } => ApiError::conflict(err.to_string()),
            MarketError::Validation(_) => ApiError::bad_request(err.to_string()),
            MarketError::Storage(_) => {
                error!("{}", err);
                ApiError::internal_error(err.to_string())
            }
        }
    }
}
