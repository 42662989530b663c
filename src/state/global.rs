//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Articles currently shown in the feed
    pub articles: RwSignal<Vec<Article>>,
    /// When the backend last refreshed its feed, as reported by the API
    pub last_updated: RwSignal<Option<String>>,
    /// Outcome of the CSRF bootstrap task
    pub session: RwSignal<SessionStatus>,
    /// CSRF token threaded into state-changing request headers
    pub csrf_token: RwSignal<Option<String>>,
    /// API auth token for the signed-in user, if any
    pub auth_token: RwSignal<Option<String>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// A feed refresh is in flight
    pub refreshing: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// One article in the feed, as served by the backend.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Article {
    pub title: String,
    pub authors: String,
    pub journal: String,
    #[serde(default)]
    pub journal_url: Option<String>,
    /// ISO date (`YYYY-MM-DD`) or null when the source feed had none
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
}

impl Article {
    /// Human-readable publication date, falling back to the raw string
    /// when it is not an ISO date.
    pub fn published_display(&self) -> Option<String> {
        let raw = self.published_date.as_deref()?;
        match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date.format("%b %-d, %Y").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }

    /// Link to the article itself, preferring the DOI resolver.
    pub fn link(&self) -> Option<String> {
        if let Some(doi) = self.doi.as_deref() {
            if !doi.is_empty() {
                return Some(format!("https://doi.org/{}", doi));
            }
        }
        self.journal_url.clone()
    }
}

/// Lifecycle of the CSRF bootstrap task.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// Token fetch still in flight (or not started)
    Priming,
    /// Token fetched and cookie written
    Ready,
    /// Fetch or cookie write failed; the message is diagnostic only
    Failed(String),
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        articles: create_rw_signal(Vec::new()),
        last_updated: create_rw_signal(None),
        session: create_rw_signal(SessionStatus::Priming),
        csrf_token: create_rw_signal(None),
        auth_token: create_rw_signal(None),
        loading: create_rw_signal(false),
        refreshing: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.get().is_some()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(date: Option<&str>, doi: Option<&str>, journal_url: Option<&str>) -> Article {
        Article {
            title: "Grain boundary motion".to_string(),
            authors: "A. Author, B. Author".to_string(),
            journal: "Acta Materialia".to_string(),
            journal_url: journal_url.map(String::from),
            published_date: date.map(String::from),
            doi: doi.map(String::from),
            abstract_text: None,
        }
    }

    #[test]
    fn test_article_tolerates_null_fields() {
        let parsed: Article = serde_json::from_str(
            r#"{
                "title": "T",
                "authors": "A",
                "journal": "J",
                "journal_url": null,
                "published_date": null,
                "doi": null,
                "abstract": null
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.title, "T");
        assert!(parsed.published_date.is_none());
        assert!(parsed.abstract_text.is_none());
    }

    #[test]
    fn test_abstract_field_renames() {
        let parsed: Article = serde_json::from_str(
            r#"{"title":"T","authors":"A","journal":"J","abstract":"body text"}"#,
        )
        .unwrap();
        assert_eq!(parsed.abstract_text.as_deref(), Some("body text"));
    }

    #[test]
    fn test_published_display_formats_iso_dates() {
        let a = article(Some("2024-03-05"), None, None);
        assert_eq!(a.published_display().as_deref(), Some("Mar 5, 2024"));
    }

    #[test]
    fn test_published_display_passes_through_non_iso() {
        let a = article(Some("Spring 2024"), None, None);
        assert_eq!(a.published_display().as_deref(), Some("Spring 2024"));
    }

    #[test]
    fn test_link_prefers_doi() {
        let a = article(None, Some("10.1000/xyz"), Some("https://journal.example"));
        assert_eq!(a.link().as_deref(), Some("https://doi.org/10.1000/xyz"));

        let b = article(None, None, Some("https://journal.example"));
        assert_eq!(b.link().as_deref(), Some("https://journal.example"));
    }
}
