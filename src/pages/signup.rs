//! Signup Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;

/// Check a signup form before it goes over the wire.
fn validate_signup(
    username: &str,
    email: &str,
    password1: &str,
    password2: &str,
) -> Result<(), String> {
    if username.is_empty() || email.is_empty() || password1.is_empty() || password2.is_empty() {
        return Err("All fields are required".to_string());
    }
    if password1 != password2 {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Signup form page
#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password1, set_password1) = create_signal(String::new());
    let (password2, set_password2) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let e = email.get();
        let p1 = password1.get();
        let p2 = password2.get();

        if let Err(message) = validate_signup(&u, &e, &p1, &p2) {
            state.show_error(&message);
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let csrf = state_clone.csrf_token.get_untracked();
            match api::signup(&u, &e, &p1, &p2, csrf.as_deref()).await {
                Ok(message) => {
                    state_clone.show_success(&message);
                    navigate("/login", Default::default());
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
                <h1 class="text-2xl font-bold mb-6">"Create an account"</h1>

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

                    // Email
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Password
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password1.get()
                            on:input=move |ev| set_password1.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Password confirmation
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Confirm password"</label>
                        <input
                            type="password"
                            prop:value=move || password2.get()
                            on:input=move |ev| set_password2.set(event_target_value(&ev))
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
                        {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <p class="text-gray-400 text-sm mt-6">
                    "Already have an account? "
                    <A href="/login" class="text-primary-400 hover:text-primary-300">
                        "Log in"
                    </A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_signup_requires_all_fields() {
        assert!(validate_signup("", "a@b.c", "pw", "pw").is_err());
        assert!(validate_signup("user", "", "pw", "pw").is_err());
        assert!(validate_signup("user", "a@b.c", "", "").is_err());
    }

    #[test]
    fn test_validate_signup_requires_matching_passwords() {
        let err = validate_signup("user", "a@b.c", "pw1", "pw2").unwrap_err();
        assert_eq!(err, "Passwords do not match");
    }

    #[test]
    fn test_validate_signup_accepts_complete_form() {
        assert!(validate_signup("user", "a@b.c", "pw", "pw").is_ok());
    }
}
