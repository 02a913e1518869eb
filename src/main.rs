use yew::prelude::*;

mod config;
mod components {
    pub mod carousel;
    pub mod custom_dropdown;
    pub mod typewriter;
}
mod content {
    pub mod blog;
    pub mod dropdowns;
    pub mod errors;
    pub mod hiring;
    pub mod steps;
    pub mod words;
    pub mod validate;
}
mod pages {
    pub mod about;
    pub mod categories;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod working_together;
}

use pages::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    gloo_console::log!("maiafrid portfolio starting");

    if let Err(e) = content::validate::validate() {
        log::error!("Static content failed validation: {}", e);
    }

    yew::Renderer::<App>::new().render();
}
