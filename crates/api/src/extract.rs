//! Request extractors.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use crate::error::AppError;

/// JSON body extractor whose rejections surface as [`AppError::BadRequest`].
///
/// Axum's own [`Json`] answers syntax errors with 400 but missing fields and
/// wrong types with 422, and uses a plain-text body. This wrapper reports
/// every malformed body as 400 with the usual `{"message": ...}` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::BadRequest(format!("Invalid request data: {}", rejection.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// Path extractor whose rejections surface as JSON errors.
///
/// An id segment that does not parse (`/api/rooms/abc`) names no record, so
/// it is reported as 404. A route/handler mismatch is a 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(PathRejection::FailedToDeserializePathParams(err)) => {
                tracing::debug!(error = %err.body_text(), "Rejected path parameter");
                Err(AppError::NotFound("Resource not found".to_string()))
            }
            Err(rejection) => Err(AppError::InternalError(rejection.body_text())),
        }
    }
}
