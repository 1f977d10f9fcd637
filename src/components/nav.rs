//! Navigation Component
//!
//! Header bar with brand and one link per route-table entry.

use leptos::*;
use leptos_router::*;

use crate::routes::ROUTES;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💬"</span>
                        <span class="text-xl font-bold text-white">"Parley"</span>
                    </A>

                    // One link per route, labeled by the route's name
                    <div class="flex items-center space-x-1">
                        {ROUTES
                            .iter()
                            .map(|route| view! {
                                <NavLink href=route.path label=route.name />
                            })
                            .collect_view()}
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
