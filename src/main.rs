//! Parley
//!
//! A minimal chat frontend built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It mounts the root component into the `#app` element of the
//! host document; navigation between pages is handled by the router using
//! real paths (the server must fall back to `index.html` for every path).

use leptos::*;
use wasm_bindgen::JsCast;

mod app;
mod components;
mod pages;
mod routes;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // The host document must provide the mount point before bootstrap
    let mount = document()
        .get_element_by_id("app")
        .expect("mount point #app not found in host document")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("mount point #app is not an HTML element");

    web_sys::console::log_1(&"Parley starting".into());

    mount_to(mount, || view! { <app::App /> });
}
