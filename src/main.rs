//! LitFeed
//!
//! Journal article feed client built with Leptos (WASM).
//!
//! # Features
//!
//! - Browse recently published articles from followed journals
//! - Account signup and token login against the LitFeed backend
//! - CSRF session priming at startup
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It talks to the backend over HTTP with cookies
//! included; routing is history-API based, so path changes never reload
//! the page.

use leptos::*;
use wasm_bindgen::JsCast;

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod session;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app at the #app anchor of the host page
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document available");
    let root = document
        .get_element_by_id("app")
        .expect("mount point #app not found")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("mount point #app is not an HTML element");

    mount_to(root, || view! { <app::App /> });
}
