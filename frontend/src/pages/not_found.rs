use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Seite nicht gefunden"}</h1>
            <Link<Route> to={Route::Home} classes="btn btn--primary">
                {"Zur Startseite"}
            </Link<Route>>
        </div>
    }
}
