//! Service-layer error type
//!
//! Repository calls fail with a `BoxError`, business rules with an `AppError`;
//! `ServiceError` carries either so services can use `?` on both. Handlers
//! pick the code an infrastructure failure is reported under.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::db::BoxError;

/// - `Db`: database/infrastructure errors (logged, mapped to a generic error)
/// - `App`: business-rule errors (passed through to the client)
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl ServiceError {
    /// Convert to `AppError`, reporting infrastructure failures under `code`
    pub fn into_app_error(self, code: ErrorCode) -> AppError {
        match self {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, code = %code, "Service database error");
                AppError::new(code)
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        e.into_app_error(ErrorCode::InternalError)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
