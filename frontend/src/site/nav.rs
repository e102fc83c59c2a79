use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Header links in display order.
pub const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Start"),
    (Route::Services, "Leistungen"),
    (Route::Gallery, "Galerie"),
    (Route::Contact, "Kontakt"),
];

/// A link is active when it points at the page being shown. Unknown pages
/// mark nothing.
pub fn is_active(link: &Route, current: Option<&Route>) -> bool {
    match current {
        Some(Route::NotFound) | None => false,
        Some(current) => current == link,
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="header">
            <div class="header__inner">
                <Link<Route> to={Route::Home} classes="header__logo">
                    {"MUSTERBETRIEB"}
                </Link<Route>>
                <nav class="nav" aria-label="Hauptnavigation">
                    <ul class="nav__list">
                        {
                            NAV_LINKS.iter().map(|(route, label)| {
                                let active = is_active(route, current.as_ref());
                                html! {
                                    <li class="nav__item">
                                        <Link<Route>
                                            to={route.clone()}
                                            classes={classes!("nav__link", active.then_some("nav__link--active"))}
                                        >
                                            {*label}
                                        </Link<Route>>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_the_current_link_is_active() {
        for (current, _) in NAV_LINKS.iter() {
            let active: Vec<_> = NAV_LINKS
                .iter()
                .filter(|(route, _)| is_active(route, Some(current)))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(&active[0].0, current);
        }
    }

    #[test]
    fn unknown_page_marks_nothing() {
        assert!(NAV_LINKS
            .iter()
            .all(|(route, _)| !is_active(route, Some(&Route::NotFound))));
        assert!(NAV_LINKS.iter().all(|(route, _)| !is_active(route, None)));
    }
}
