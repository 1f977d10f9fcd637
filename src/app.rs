//! App Root Component
//!
//! Root component wiring the route table into the router.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::routes;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=routes::HOME.path view=routes::HOME.view />
                        <Route path=routes::CHAT.path view=routes::CHAT.view />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mounts_into_app_element() {
        let document = leptos::document();
        let target = document.create_element("div").unwrap();
        target.set_id("app");
        document.body().unwrap().append_child(&target).unwrap();

        let mount: web_sys::HtmlElement = target.clone().dyn_into().unwrap();
        mount_to(mount, || view! { <App /> });

        assert!(target.child_element_count() > 0);
    }
}
