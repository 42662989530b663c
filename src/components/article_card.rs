//! Article Card Component
//!
//! One feed entry: title, authors, journal, date and an expandable
//! abstract.

use leptos::*;

use crate::state::global::Article;

/// Single article in the feed
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let has_abstract = article
        .abstract_text
        .as_deref()
        .is_some_and(|text| !text.is_empty());
    let abstract_text = article.abstract_text.clone().unwrap_or_default();
    let published = article.published_display();
    let link = article.link();

    view! {
        <article class="bg-gray-800 rounded-xl p-5 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h3 class="font-semibold text-lg leading-snug">
                        {match link {
                            Some(url) => view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener"
                                    class="hover:text-primary-400 transition-colors"
                                >
                                    {article.title.clone()}
                                </a>
                            }.into_view(),
                            None => article.title.clone().into_view(),
                        }}
                    </h3>
                    <p class="text-gray-400 text-sm mt-1">{article.authors.clone()}</p>
                </div>

                {published.map(|date| view! {
                    <span class="text-gray-500 text-sm whitespace-nowrap">{date}</span>
                })}
            </div>

            <div class="flex items-center space-x-4 mt-3 text-sm text-gray-400">
                {match article.journal_url.clone() {
                    Some(url) => view! {
                        <a href=url target="_blank" rel="noopener" class="hover:text-white underline">
                            {article.journal.clone()}
                        </a>
                    }.into_view(),
                    None => article.journal.clone().into_view(),
                }}

                {article.doi.clone().filter(|doi| !doi.is_empty()).map(|doi| view! {
                    <span class="text-gray-500">"DOI: "{doi}</span>
                })}
            </div>

            {has_abstract.then(|| view! {
                <div class="mt-3">
                    <button
                        on:click=move |_| set_expanded.update(|e| *e = !*e)
                        class="text-sm text-primary-400 hover:text-primary-300"
                    >
                        {move || if expanded.get() { "Hide abstract" } else { "Show abstract" }}
                    </button>

                    {move || {
                        if expanded.get() {
                            view! {
                                <p class="text-gray-300 text-sm mt-2 leading-relaxed">
                                    {abstract_text.clone()}
                                </p>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>
            })}
        </article>
    }
}
