//! Route Table
//!
//! Static mapping from URL path to page. The table is pure data: it is
//! built without touching the DOM and is consumed once by the app root
//! when the router is constructed.

use leptos::*;

use crate::pages::{Feed, Login, Signup};

/// A single registered route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub page: Page,
}

/// The closed set of pages the router can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Feed,
    Login,
    Signup,
}

impl Page {
    /// Render the page component for this variant.
    pub fn render(self) -> View {
        match self {
            Page::Feed => view! { <Feed /> }.into_view(),
            Page::Login => view! { <Login /> }.into_view(),
            Page::Signup => view! { <Signup /> }.into_view(),
        }
    }
}

/// The registered routes, in declaration order.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry { path: "/", page: Page::Feed },
        RouteEntry { path: "/login", page: Page::Login },
        RouteEntry { path: "/signup", page: Page::Signup },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_paths() {
        let table = route_table();
        let paths: Vec<&str> = table.iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["/", "/login", "/signup"]);
    }

    #[test]
    fn test_route_table_paths_unique() {
        let table = route_table();
        for (i, a) in table.iter().enumerate() {
            for b in table.iter().skip(i + 1) {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_route_table_dispatch() {
        let table = route_table();
        assert_eq!(table[0].page, Page::Feed);
        assert_eq!(table[1].page, Page::Login);
        assert_eq!(table[2].page, Page::Signup);
    }
}
