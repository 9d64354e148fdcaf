use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact {
    pub mod form;
    pub mod validators;
    pub mod phone;
    pub mod transport;
    pub mod controller;
}
mod components {
    pub mod contact_form;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod faq;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
