use hivemind_core::error::CoreError;
use hivemind_db::StoreError;

/// Failure of a domain service operation.
///
/// Domain rule violations come through as [`CoreError`]; storage failures as
/// [`StoreError`]. No write happens before every [`CoreError`] check passes.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
