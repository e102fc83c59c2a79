use yew::prelude::*;
use yew_router::components::Link;

use crate::pages::use_scroll_to_top;
use crate::site::{LazyImage, Reveal};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">{"Handwerk, auf das Sie sich verlassen können"}</h1>
                    <p class="hero__subtitle">
                        {"Seit über 25 Jahren planen und bauen wir Bäder, Küchen und Innenräume in der Region."}
                    </p>
                    <div class="hero__actions">
                        <Link<Route> to={Route::Contact} classes="btn btn--primary">
                            {"Angebot anfragen"}
                        </Link<Route>>
                        <Link<Route> to={Route::Gallery} classes="btn btn--secondary">
                            {"Referenzen ansehen"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section intro">
                <Reveal class={classes!("intro__text")}>
                    <h2>{"Ihr Meisterbetrieb vor Ort"}</h2>
                    <p>{"Von der ersten Beratung bis zur Endreinigung erhalten Sie alles aus einer Hand. Feste Ansprechpartner, verbindliche Termine und saubere Baustellen sind für uns selbstverständlich."}</p>
                </Reveal>
                <Reveal class={classes!("intro__image")}>
                    <LazyImage src="/assets/images/team.jpg" alt="Unser Team auf der Baustelle" />
                </Reveal>
            </section>

            <section class="section highlights">
                <Reveal class={classes!("highlight")}>
                    <h3>{"Beratung"}</h3>
                    <p>{"Kostenlose Vor-Ort-Besichtigung und ein transparentes Festpreisangebot."}</p>
                </Reveal>
                <Reveal class={classes!("highlight")}>
                    <h3>{"Planung"}</h3>
                    <p>{"3D-Visualisierung Ihres Projekts, bevor der erste Handgriff getan ist."}</p>
                </Reveal>
                <Reveal class={classes!("highlight")}>
                    <h3>{"Ausführung"}</h3>
                    <p>{"Eigene Fachkräfte für Sanitär, Fliesen und Trockenbau."}</p>
                </Reveal>
            </section>

            <section class="section cta">
                <Reveal>
                    <h2>{"Bereit für Ihr Projekt?"}</h2>
                    <Link<Route> to={Route::Contact} classes="btn btn--primary">
                        {"Jetzt Kontakt aufnehmen"}
                    </Link<Route>>
                </Reveal>
            </section>
        </div>
    }
}
