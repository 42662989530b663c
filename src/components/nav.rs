//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_signout = state.clone();
    let sign_out = move |_| {
        api::clear_auth_token();
        state_for_signout.auth_token.set(None);
        state_for_signout.show_success("Signed out");
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🔬"</span>
                        <span class="text-xl font-bold text-white">"LitFeed"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Feed" />
                        {move || {
                            if state.is_authenticated() {
                                view! {
                                    <button
                                        on:click=sign_out.clone()
                                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                    >
                                        "Sign out"
                                    </button>
                                }.into_view()
                            } else {
                                view! {
                                    <NavLink href="/login" label="Log in" />
                                    <NavLink href="/signup" label="Sign up" />
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
