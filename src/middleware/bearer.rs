use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;

/// Bearer-token extractor.
///
/// Verification is a placeholder: any non-empty bearer token is accepted.
/// There is no signature check, no expiry, and no user resolution here;
/// real verification belongs upstream of this service and this check must
/// not be mistaken for it.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Shape check for an `Authorization` header value.
///
/// Accepts exactly `Bearer <token>` with a case-insensitive scheme and a
/// non-empty token; anything else is rejected as Unauthorized.
pub fn verify_bearer(header: Option<&str>) -> Result<String, AppError> {
    let value = header.ok_or_else(|| {
        AppError::Unauthorized(anyhow::anyhow!("Missing Authorization header"))
    })?;

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 {
        return Err(AppError::Unauthorized(anyhow::anyhow!(
            "Malformed Authorization header"
        )));
    }

    let (scheme, token) = (parts[0], parts[1]);
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::Unauthorized(anyhow::anyhow!(
            "Unsupported authorization scheme"
        )));
    }
    if token.is_empty() {
        return Err(AppError::Unauthorized(anyhow::anyhow!("Empty bearer token")));
    }

    Ok(token.to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        verify_bearer(header).map(BearerToken)
    }
}
