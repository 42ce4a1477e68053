//! 请求体校验提取器

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;
use tracing::warn;

use super::error::CoreError;
use crate::schema::Schema;

/// 将 JSON 请求体按模型 `T` 校验后交给处理器
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema + Send,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!(model = T::NAME, "rejected request body: {}", rejection.body_text());
                CoreError::BadRequest(rejection.body_text())
            })?;

        let parsed = T::parse_obj(&value).map_err(|err| {
            warn!(model = T::NAME, errors = err.errors().len(), "request body failed validation");
            err
        })?;

        Ok(Self(parsed))
    }
}
