mod catalog;
mod config;
mod error;
mod export;
mod gallery;
mod primitives;
mod scene;
mod state;

use dioxus::prelude::*;
use gallery::{GalleryPage, Home, Model};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(GalleryPage)]
    #[route("/")]
    Home {},
    #[route("/model/:id")]
    Model { id: String },
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Install the rendering surface once; later pushes find it on `window`
    use_effect(gallery::surface::install);

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
