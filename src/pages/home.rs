//! Home Page
//!
//! Landing page with a link into the chat room.

use leptos::*;
use leptos_router::*;

use crate::routes;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"💬"</div>
            <h1 class="text-3xl font-bold mb-2">"Parley"</h1>
            <p class="text-gray-400 mb-6">
                "A small place to talk. No accounts, no history, just chat."
            </p>
            <A
                href=routes::path_for("Chat").unwrap_or("/")
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Open the chat"
            </A>
        </div>
    }
}
