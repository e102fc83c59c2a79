use yew::prelude::*;

use crate::pages::use_scroll_to_top;
use crate::site::{ContactForm, Reveal};

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();

    html! {
        <div class="contact-page">
            <section class="page-header">
                <h1>{"Kontakt"}</h1>
                <p>{"Schreiben Sie uns, wir melden uns innerhalb eines Werktags."}</p>
            </section>
            <section class="section contact">
                <Reveal class={classes!("contact__details")}>
                    <h2>{"So erreichen Sie uns"}</h2>
                    <address>
                        {"Musterbetrieb GmbH"}<br />
                        {"Musterstraße 1"}<br />
                        {"12345 Musterstadt"}
                    </address>
                    <p>
                        <a href="tel:+4912345678900">{"+49 123 456 789 00"}</a><br />
                        <a href="mailto:info@musterbetrieb.de">{"info@musterbetrieb.de"}</a>
                    </p>
                </Reveal>
                <Reveal class={classes!("contact__form")}>
                    <ContactForm />
                </Reveal>
            </section>
        </div>
    }
}
