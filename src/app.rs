//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::routes::route_table;
use crate::session;
use crate::state::global::{provide_global_state, GlobalState, SessionStatus};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Restore a previous sign-in
    if let Some(token) = api::load_auth_token() {
        state.auth_token.set(Some(token));
    }

    // Prime the CSRF session; mounting does not wait for it
    session::init_session(state.clone());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        {route_table().into_iter().map(|entry| {
                            view! { <Route path=entry.path view=move || entry.page.render() /> }
                        }).collect_view()}
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with session status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing session bootstrap status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // CSRF session status
                <div class="flex items-center space-x-2">
                    {move || {
                        match state.session.get() {
                            SessionStatus::Ready => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Session ready"</span>
                                </span>
                            }.into_view(),
                            SessionStatus::Priming => view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full pulse" />
                                    <span>"Connecting..."</span>
                                </span>
                            }.into_view(),
                            SessionStatus::Failed(_) => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Session offline"</span>
                                </span>
                            }.into_view(),
                        }
                    }}
                </div>

                // Feed freshness
                <div class="text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .map(|stamp| format!("Feed updated: {}", stamp))
                            .unwrap_or_else(|| "Feed not updated yet".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to the feed"
            </A>
        </div>
    }
}
