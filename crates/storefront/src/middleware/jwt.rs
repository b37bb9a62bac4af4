use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::HttpError, model::Role};
use tracing::warn;

/// Pulls the token from the `token` cookie, falling back to a
/// `Authorization: Bearer` header.
fn extract_token(cookie_jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    if let Some(cookie) = cookie_jar.get("token") {
        return Some(cookie.value().to_string());
    }

    let auth_value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let bearer = auth_value.strip_prefix("Bearer ")?;
    Some(bearer.to_string())
}

/// Guards the `/admin` routes. Missing, invalid and non-admin tokens all get
/// the same 403 `{"error": "Not authorized"}` answer.
pub async fn admin_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let Some(token) = extract_token(&cookie_jar, &req) else {
        warn!("🚫 Admin route hit without a token");
        return Err(HttpError::NotAuthorized);
    };

    let Ok(claims) = jwt.verify_token(&token) else {
        warn!("🚫 Admin route hit with an invalid token");
        return Err(HttpError::NotAuthorized);
    };

    if claims.role != Role::Admin {
        warn!("🚫 User {} is not an admin", claims.user_id);
        return Err(HttpError::NotAuthorized);
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
