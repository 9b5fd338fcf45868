//! Extractors whose rejections use the `ApiResponse` envelope
//!
//! axum's own `Json` and `Query` reject with plain text; these wrap them and
//! report `ErrorCode::InvalidRequest` instead.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};

/// JSON request body
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::with_message(ErrorCode::InvalidRequest, e.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::with_message(ErrorCode::InvalidRequest, e.body_text()))?;
        Ok(Self(value))
    }
}
