//! HTTP API Client
//!
//! Functions for communicating with the LitFeed backend. Every request
//! runs with credentials included so the Django session and CSRF
//! cookies travel with it.

use gloo_net::http::Request;
use std::collections::BTreeMap;
use web_sys::RequestCredentials;

use crate::state::global::Article;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Local storage key for the API base override
const API_BASE_KEY: &str = "litfeed_api_url";

/// Local storage key for the signed-in user's token
const AUTH_TOKEN_KEY: &str = "litfeed_auth_token";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize a base URL: remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Load the persisted auth token, if the user signed in previously
pub fn load_auth_token() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(AUTH_TOKEN_KEY).ok()?
}

/// Persist the auth token across reloads
pub fn store_auth_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(AUTH_TOKEN_KEY, token);
        }
    }
}

/// Forget the persisted auth token
pub fn clear_auth_token() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct LastUpdatedResponse {
    last_updated: String,
}

#[derive(Debug, serde::Deserialize)]
struct UpdateResponse {
    status: String,
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, serde::Deserialize)]
struct SignupResponse {
    message: String,
}

// ============ API Functions ============

/// Fetch the article feed
pub async fn fetch_articles() -> Result<Vec<Article>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/articles/api/articles/", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Feed request returned {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch when the backend last refreshed its feed
pub async fn fetch_last_updated() -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/articles/api/last-updated/", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Last-updated request returned {}", response.status()));
    }

    let result: LastUpdatedResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.last_updated)
}

/// Ask the backend to re-scrape its journal feeds
pub async fn refresh_articles() -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/articles/update-articles/", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh request returned {}", response.status()));
    }

    let result: UpdateResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    if result.status != "success" {
        return Err(result.message);
    }

    Ok(result.message)
}

/// Exchange credentials for an API token
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/articles/api/login/", api_base))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        // Token endpoint reports failures as a field->messages map
        let errors: BTreeMap<String, Vec<String>> = response.json().await
            .unwrap_or_default();
        if errors.is_empty() {
            return Err(format!("Login failed ({})", response.status()));
        }
        return Err(flatten_form_errors(&errors));
    }

    let result: TokenResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.token)
}

/// Create a new account
pub async fn signup(
    username: &str,
    email: &str,
    password1: &str,
    password2: &str,
    csrf_token: Option<&str>,
) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct SignupRequest {
        username: String,
        email: String,
        password1: String,
        password2: String,
    }

    #[derive(serde::Deserialize, Default)]
    struct SignupErrors {
        #[serde(default)]
        errors: BTreeMap<String, Vec<String>>,
        #[serde(default)]
        error: Option<String>,
    }

    let api_base = get_api_base();

    let mut request = Request::post(&format!("{}/users/signup/", api_base))
        .credentials(RequestCredentials::Include);

    // The signup endpoint is CSRF-protected; send the primed token
    if let Some(token) = csrf_token {
        request = request.header("X-CSRFToken", token);
    }

    let response = request
        .json(&SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password1: password1.to_string(),
            password2: password2.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let body: SignupErrors = response.json().await
            .unwrap_or_default();
        if !body.errors.is_empty() {
            return Err(flatten_form_errors(&body.errors));
        }
        if let Some(error) = body.error {
            return Err(error);
        }
        return Err(format!("Signup failed ({})", response.status()));
    }

    let result: SignupResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.message)
}

/// Collapse a field->messages validation map into one readable line
fn flatten_form_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .map(|(field, messages)| {
            if field == "non_field_errors" {
                messages.join(" ")
            } else {
                format!("{}: {}", field, messages.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_trims_trailing_slashes() {
        assert_eq!(normalize_base("http://127.0.0.1:8000/"), "http://127.0.0.1:8000");
        assert_eq!(normalize_base("http://127.0.0.1:8000"), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_flatten_form_errors_names_fields() {
        let mut errors = BTreeMap::new();
        errors.insert("password2".to_string(), vec!["Passwords do not match.".to_string()]);
        errors.insert("username".to_string(), vec!["Already taken.".to_string()]);

        let flat = flatten_form_errors(&errors);
        assert_eq!(flat, "password2: Passwords do not match.; username: Already taken.");
    }

    #[test]
    fn test_flatten_form_errors_hides_non_field_key() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "non_field_errors".to_string(),
            vec!["Unable to log in with provided credentials.".to_string()],
        );

        let flat = flatten_form_errors(&errors);
        assert_eq!(flat, "Unable to log in with provided credentials.");
    }

    #[test]
    fn test_token_response_parses() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"token":"tok-1"}"#).unwrap();
        assert_eq!(parsed.token, "tok-1");
    }

    #[test]
    fn test_update_response_parses() {
        let parsed: UpdateResponse =
            serde_json::from_str(r#"{"status":"success","message":"Articles updated successfully!"}"#)
                .unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.message, "Articles updated successfully!");
    }
}
