use yew::prelude::*;
use log::{info, Level};

mod config;
mod quiz {
    pub mod controller;
    pub mod form;
    pub mod gate;
    pub mod phone_mask;
    pub mod state;
    pub mod validate;
}
mod components {
    pub mod accordion;
    pub mod drag_scroll;
    pub mod filters;
    pub mod header;
    pub mod marquee;
    pub mod quiz;
    pub mod reveal;
    pub mod tabs;
    pub mod video;
}
mod pages {
    pub mod landing;
}

use config::LandingConfig;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let config = use_memo(|_| LandingConfig::load(), ());

    html! {
        <ContextProvider<LandingConfig> context={(*config).clone()}>
            <Landing />
        </ContextProvider<LandingConfig>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
