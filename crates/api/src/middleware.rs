use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use portal_auth::SessionValidator;

use crate::context::SessionContext;

/// Cookie carrying the session token for browser navigation.
pub const SESSION_COOKIE: &str = "portal_session";

#[derive(Clone)]
pub struct SessionState {
    pub validator: Arc<dyn SessionValidator>,
}

/// Resolve the request's session and attach it as a [`SessionContext`].
///
/// Never rejects: missing or invalid tokens yield an anonymous session, and
/// the access gate decides where that session may go.
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: Request,
    next: Next,
) -> Response {
    let session = match extract_token(req.headers()) {
        None => SessionContext::anonymous(),
        Some(token) => match state.validator.validate(token, Utc::now()) {
            Ok(claims) => SessionContext::from_claims(&claims),
            Err(e) => {
                tracing::debug!(error = %e, "session token rejected; continuing anonymously");
                SessionContext::anonymous()
            }
        },
    };

    req.extensions_mut().insert(session);
    next.run(req).await
}

/// Bearer token from `Authorization`, else the session cookie.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        return value
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
        })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(header::HeaderName, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn bearer_token_is_extracted() {
        let h = headers(&[(header::AUTHORIZATION, "Bearer abc.def")]);
        assert_eq!(extract_token(&h), Some("abc.def"));
    }

    #[test]
    fn non_bearer_authorization_yields_nothing() {
        let h = headers(&[
            (header::AUTHORIZATION, "Basic Zm9vOmJhcg=="),
            (header::COOKIE, "portal_session=abc"),
        ]);
        assert_eq!(extract_token(&h), None);
    }

    #[test]
    fn session_cookie_is_extracted() {
        let h = headers(&[(header::COOKIE, "theme=dark; portal_session=tok; lang=en")]);
        assert_eq!(extract_token(&h), Some("tok"));
    }

    #[test]
    fn empty_or_missing_cookie_yields_nothing() {
        assert_eq!(extract_token(&headers(&[(header::COOKIE, "portal_session=")])), None);
        assert_eq!(extract_token(&headers(&[(header::COOKIE, "theme=dark")])), None);
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }
}
