/// Request parameter extraction
use crate::error::ServerError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use cadence_core::RequestParams;
use url::form_urlencoded;

/// Query string parameters, plus the body of url-encoded form posts
#[derive(Debug, Clone)]
pub struct SubsonicParams(pub RequestParams);

#[async_trait]
impl<S> FromRequest<S> for SubsonicParams
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut params: RequestParams = req
            .uri()
            .query()
            .map(|query| form_urlencoded::parse(query.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| ServerError::BadRequest(format!("Failed to read form body: {}", e)))?;
            params.extend(form_urlencoded::parse(&body).into_owned());
        }

        Ok(Self(params))
    }
}
