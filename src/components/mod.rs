//! UI Components
//!
//! Reusable Leptos components for the feed client.

pub mod article_card;
pub mod loading;
pub mod nav;
pub mod toast;

pub use article_card::ArticleCard;
pub use loading::{InlineLoading, ListSkeleton};
pub use nav::Nav;
pub use toast::Toast;
