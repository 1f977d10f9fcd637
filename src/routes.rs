//! Route Table
//!
//! Static mapping from navigable paths to page components. The table is
//! constructed once, at compile time, and never mutated; both the router
//! and the navigation header read from it.

use leptos::*;

use crate::pages::{Chat, Home};

/// A single navigable route: a unique path, a unique symbolic name, and
/// the page component it renders.
#[derive(Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub view: fn() -> View,
}

/// Landing page route.
pub const HOME: RouteDef = RouteDef {
    path: "/",
    name: "Home",
    view: home_view,
};

/// Chat page route.
pub const CHAT: RouteDef = RouteDef {
    path: "/chat",
    name: "Chat",
    view: chat_view,
};

/// The full route table, in declaration order.
pub const ROUTES: [RouteDef; 2] = [HOME, CHAT];

fn home_view() -> View {
    view! { <Home /> }.into_view()
}

fn chat_view() -> View {
    view! { <Chat /> }.into_view()
}

/// Resolve a route's symbolic name to its path.
pub fn path_for(name: &str) -> Option<&'static str> {
    ROUTES.iter().find(|route| route.name == name).map(|route| route.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn test_names_are_distinct() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_table_contents() {
        assert_eq!(ROUTES.len(), 2);
        assert_eq!((ROUTES[0].path, ROUTES[0].name), ("/", "Home"));
        assert_eq!((ROUTES[1].path, ROUTES[1].name), ("/chat", "Chat"));
    }

    #[test]
    fn test_symbolic_navigation() {
        assert_eq!(path_for("Home"), Some("/"));
        assert_eq!(path_for("Chat"), Some("/chat"));
        assert_eq!(path_for("Settings"), None);
    }
}
