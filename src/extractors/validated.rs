//! Validation stage: rejects write bodies missing required fields before the handler runs.

use crate::error::AppError;
use crate::model::Resource;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::Json;
use serde_json::{Map, Value};

/// Typed payload of `R`, extracted only when every required field is present.
/// A request without a content type carries no fields, so it fails validation with 422.
pub struct Validated<R: Resource>(pub R::Payload);

#[async_trait]
impl<S, R> FromRequest<S> for Validated<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(body) = Json::<Value>::from_request(req, state).await?;
            body
        } else {
            Value::Object(Map::new())
        };
        RequestValidator::validate::<R>(body).map(Validated)
    }
}
