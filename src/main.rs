use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod shell;
mod reservation;
mod pages {
    pub mod landing;
    pub mod faq;
}
mod components {
    pub mod reservation_dialog;
    pub mod reveal;
}

use pages::landing::Landing;
use shell::PageShell;

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <PageShell>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </PageShell>
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
