//! Login Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Login form page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let p = password.get();

        if u.is_empty() || p.is_empty() {
            state.show_error("Username and password are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&u, &p).await {
                Ok(token) => {
                    api::store_auth_token(&token);
                    state_clone.auth_token.set(Some(token));
                    state_clone.show_success("Signed in");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <div class="bg-gray-800 rounded-xl p-6 mt-8">
                <h1 class="text-2xl font-bold mb-6">"Log in"</h1>

                <form on:submit=on_submit class="space-y-4">
                    // Username
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Password
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Log in" }}
                    </button>
                </form>

                <p class="text-gray-400 text-sm mt-6">
                    "No account yet? "
                    <A href="/signup" class="text-primary-400 hover:text-primary-300">
                        "Sign up"
                    </A>
                </p>
            </div>
        </div>
    }
}
