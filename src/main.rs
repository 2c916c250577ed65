use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod email;
mod forms;
mod models;
mod notify;
mod scheduler;
mod services;
mod validation;

mod components {
    pub mod audience_chart;
    pub mod contact_form;
    pub mod form_fields;
    pub mod partnership_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use services::Services;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/partner")]
    Partner,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing key="home" /> }
        },
        Route::Partner => {
            info!("Rendering Home page with partnership form open");
            html! { <Landing key="partner" open_partnership=true /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"That page doesn't exist."}</p>
                    <Link<Route> to={Route::Home}>{"Back to The Learn Up"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    let services = use_memo(|_| Services::browser(), ());

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Services>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
