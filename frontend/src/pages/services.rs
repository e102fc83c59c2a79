use yew::prelude::*;

use crate::pages::use_scroll_to_top;
use crate::site::{LazyImage, Reveal};

struct Service {
    title: &'static str,
    text: &'static str,
    image: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "Badsanierung",
        text: "Komplettsanierung inklusive Rückbau, Installation, Fliesenarbeiten und barrierefreier Umbauten.",
        image: "/assets/images/service-bad.jpg",
    },
    Service {
        title: "Küchenmontage",
        text: "Aufmaß, Lieferung und Montage Ihrer Küche samt Wasser- und Elektroanschluss.",
        image: "/assets/images/service-kueche.jpg",
    },
    Service {
        title: "Innenausbau",
        text: "Trockenbau, Dachgeschossausbau und Raumaufteilung nach Ihren Wünschen.",
        image: "/assets/images/service-innenausbau.jpg",
    },
    Service {
        title: "Reparaturservice",
        text: "Schnelle Hilfe bei Rohrbruch, Verstopfung und defekten Armaturen.",
        image: "/assets/images/service-reparatur.jpg",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <section class="page-header">
                <h1>{"Leistungen"}</h1>
                <p>{"Alles rund um Bad, Küche und Innenausbau."}</p>
            </section>
            <section class="section services-grid">
                {
                    SERVICES.iter().map(|service| html! {
                        <Reveal class={classes!("service-card")}>
                            <LazyImage class={classes!("service-card__image")} src={service.image} alt={service.title} />
                            <h2 class="service-card__title">{service.title}</h2>
                            <p class="service-card__text">{service.text}</p>
                        </Reveal>
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}
