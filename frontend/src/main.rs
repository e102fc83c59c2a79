use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod gallery;
mod pages;
mod site;

use config::MotionPreference;
use pages::{
    contact::Contact, gallery::GalleryPage, home::Home, not_found::NotFound, services::Services,
};
use site::Header;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/leistungen")]
    Services,
    #[at("/galerie")]
    Gallery,
    #[at("/kontakt")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Services => html! { <Services /> },
        Route::Gallery => html! { <GalleryPage /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // Read once; a change of the OS setting later is not followed.
    let motion = use_state(MotionPreference::detect);

    html! {
        <ContextProvider<MotionPreference> context={*motion}>
            <BrowserRouter>
                <Header />
                <main class="main">
                    <Switch<Route> render={switch} />
                </main>
                <footer class="footer">
                    <p>{"© Musterbetrieb GmbH · Musterstraße 1 · 12345 Musterstadt"}</p>
                </footer>
            </BrowserRouter>
        </ContextProvider<MotionPreference>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting Musterbetrieb frontend");
    yew::Renderer::<App>::new().render();
}
