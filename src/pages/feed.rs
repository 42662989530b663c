//! Feed Page
//!
//! The landing page: a list of recently published journal articles.

use leptos::*;

use crate::api;
use crate::components::{ArticleCard, InlineLoading, ListSkeleton};
use crate::state::global::GlobalState;

/// Article feed page
#[component]
pub fn Feed() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let articles_signal = state.articles;
    let loading_signal = state.loading;
    let refreshing_signal = state.refreshing;

    // Fetch the feed and the last-updated stamp on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        state.loading.set(true);
        spawn_local(async move {
            match api::fetch_articles().await {
                Ok(articles) => {
                    state.articles.set(articles);
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });

        let state = state_for_effect.clone();
        spawn_local(async move {
            // The stamp is decoration; a failure here is not worth a toast
            match api::fetch_last_updated().await {
                Ok(stamp) => {
                    state.last_updated.set(Some(stamp));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch last-updated: {}", e).into());
                }
            }
        });
    });

    let state_for_refresh = state.clone();
    let on_refresh = move |_| {
        if refreshing_signal.get() {
            return;
        }
        refreshing_signal.set(true);

        let state = state_for_refresh.clone();
        spawn_local(async move {
            match api::refresh_articles().await {
                Ok(message) => {
                    state.show_success(&message);
                    match api::fetch_articles().await {
                        Ok(articles) => {
                            state.articles.set(articles);
                        }
                        Err(e) => {
                            state.show_error(&e);
                        }
                    }
                    if let Ok(stamp) = api::fetch_last_updated().await {
                        state.last_updated.set(Some(stamp));
                    }
                }
                Err(e) => {
                    state.show_error(&e);
                }
            }
            state.refreshing.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Article Feed"</h1>
                    <p class="text-gray-400 mt-1">"New publications from the journals you follow"</p>
                </div>

                <button
                    on:click=on_refresh
                    disabled=move || refreshing_signal.get()
                    class="flex items-center space-x-2 px-4 py-2 bg-primary-600 hover:bg-primary-700
                           disabled:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    {move || {
                        if refreshing_signal.get() {
                            view! {
                                <InlineLoading />
                                <span>"Refreshing..."</span>
                            }.into_view()
                        } else {
                            view! { <span>"Refresh feed"</span> }.into_view()
                        }
                    }}
                </button>
            </div>

            // Article list
            {move || {
                if loading_signal.get() {
                    view! { <ListSkeleton /> }.into_view()
                } else {
                    let articles = articles_signal.get();
                    if articles.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">"No articles yet. Try refreshing the feed."</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-3">
                                {articles.into_iter().map(|article| {
                                    view! { <ArticleCard article=article /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
