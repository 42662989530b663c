//! Session Bootstrap
//!
//! One-time CSRF priming against the backend. The backend rejects
//! state-changing requests unless they carry a token matching the
//! `csrftoken` cookie, so the client fetches a token at startup, writes
//! the cookie, and keeps the value around for request headers.
//!
//! The fetch runs as a spawned task: the app shell mounts without
//! waiting for it, and its outcome lands in [`GlobalState::session`]
//! where anything that needs the token can observe it.

use leptos::SignalSet;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::global::{GlobalState, SessionStatus};

/// Cookie name the backend expects the token under.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

#[derive(Debug, serde::Deserialize)]
struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    csrf_token: String,
}

/// Kick off the session bootstrap in the background.
///
/// Never blocks the caller. Failure is recorded in state and logged to
/// the console; nothing retries.
pub fn init_session(state: GlobalState) {
    state.session.set(SessionStatus::Priming);

    wasm_bindgen_futures::spawn_local(async move {
        match prime_session().await {
            Ok(token) => {
                state.csrf_token.set(Some(token));
                state.session.set(SessionStatus::Ready);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Session bootstrap failed: {}", e).into());
                state.session.set(SessionStatus::Failed(e));
            }
        }
    });
}

/// Fetch a CSRF token from the backend and write it into the cookie
/// store. Returns the token so callers can thread it through request
/// headers instead of re-reading the cookie.
pub async fn prime_session() -> Result<String, String> {
    let response = Request::get(&format!("{}/users/csrf/", api::get_api_base()))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("CSRF endpoint returned {}", response.status()));
    }

    let body: CsrfTokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    write_csrf_cookie(&body.csrf_token)?;

    Ok(body.csrf_token)
}

/// Write `csrftoken=<token>; path=/` into the document cookie store.
/// Later writes overwrite earlier ones; the cookie is never deleted.
fn write_csrf_cookie(token: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document available".to_string())?;

    let html_document = document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| "Document is not an HtmlDocument".to_string())?;

    html_document
        .set_cookie(&csrf_cookie_value(token))
        .map_err(|_| "Failed to write cookie".to_string())
}

/// Cookie string for a token, scoped to the site root.
fn csrf_cookie_value(token: &str) -> String {
    format!("{}={}; path=/", CSRF_COOKIE_NAME, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_format() {
        assert_eq!(csrf_cookie_value("abc123"), "csrftoken=abc123; path=/");
    }

    #[test]
    fn test_token_response_parses() {
        let body: CsrfTokenResponse =
            serde_json::from_str(r#"{"csrfToken":"abc123"}"#).unwrap();
        assert_eq!(body.csrf_token, "abc123");
    }

    #[test]
    fn test_token_response_missing_field_is_an_error() {
        let result: Result<CsrfTokenResponse, _> =
            serde_json::from_str(r#"{"detail":"no token here"}"#);
        assert!(result.is_err());
    }
}
