use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::dom;
use crate::gallery::item::GalleryItem;
use crate::gallery::lightbox::{LightboxCommand, LightboxState};

const LIGHTBOX_CSS: &str = r#"
    .lightbox {
        position: fixed;
        inset: 0;
        z-index: 1000;
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 0;
        visibility: hidden;
        transition: opacity 0.3s ease, visibility 0.3s ease;
    }
    .lightbox--open {
        opacity: 1;
        visibility: visible;
    }
    .lightbox__overlay {
        position: absolute;
        inset: 0;
        background-color: rgba(0, 0, 0, 0.9);
    }
    .lightbox__content {
        position: relative;
        max-width: 90vw;
        max-height: 90vh;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .lightbox__image-container {
        display: flex;
        align-items: center;
        justify-content: center;
        max-height: 80vh;
    }
    .lightbox__image {
        max-width: 100%;
        max-height: 80vh;
        object-fit: contain;
        border-radius: 4px;
    }
    .lightbox__close {
        position: absolute;
        top: -40px;
        right: 0;
        background: none;
        border: none;
        color: white;
        font-size: 32px;
        cursor: pointer;
        padding: 8px;
        line-height: 1;
    }
    .lightbox__prev,
    .lightbox__next {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        background: rgba(255, 255, 255, 0.1);
        border: none;
        color: white;
        font-size: 24px;
        cursor: pointer;
        padding: 16px;
        border-radius: 4px;
    }
    .lightbox__prev {
        left: -60px;
    }
    .lightbox__next {
        right: -60px;
    }
    @media (max-width: 768px) {
        .lightbox__prev,
        .lightbox__next {
            padding: 12px;
            font-size: 20px;
        }
        .lightbox__prev {
            left: 10px;
        }
        .lightbox__next {
            right: 10px;
        }
    }
    .lightbox__caption {
        color: white;
        text-align: center;
        padding: 16px;
        font-size: 14px;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub items: Rc<Vec<GalleryItem>>,
    pub state: LightboxState,
    pub on_command: Callback<LightboxCommand>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let close_ref = use_node_ref();
    let is_open = props.state.is_open();
    let session = props.state.session();

    // While open: lock scrolling, focus the close button and listen for keys.
    {
        let close_ref = close_ref.clone();
        let on_command = props.on_command.clone();
        use_effect_with_deps(
            move |is_open| {
                let listener = if *is_open {
                    if let Err(e) = dom::set_scroll_locked(true) {
                        log::warn!("Failed to lock page scroll: {}", e);
                    }
                    if let Err(e) = dom::focus(&close_ref) {
                        log::warn!("Failed to focus lightbox close button: {}", e);
                    }
                    match dom::document() {
                        Ok(document) => Some(EventListener::new(&document, "keydown", move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            if let Some(command) = LightboxCommand::from_key(&event.key()) {
                                on_command.emit(command);
                            }
                        })),
                        Err(e) => {
                            log::warn!("Lightbox keyboard navigation unavailable: {}", e);
                            None
                        }
                    }
                } else {
                    None
                };
                let was_open = *is_open;
                move || {
                    drop(listener);
                    if was_open {
                        if let Err(e) = dom::set_scroll_locked(false) {
                            log::warn!("Failed to unlock page scroll: {}", e);
                        }
                    }
                }
            },
            is_open,
        );
    }

    let command = |command: LightboxCommand| {
        let on_command = props.on_command.clone();
        Callback::from(move |_: MouseEvent| on_command.emit(command.clone()))
    };

    let shown = session.and_then(|session| props.items.get(session.current()));
    let (src, alt, caption) = match shown {
        Some(item) => (
            item.display_source().to_string(),
            item.alt.clone(),
            item.caption().to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };
    let position = session
        .map(|session| format!("Bild {} von {}", session.index() + 1, session.len()))
        .unwrap_or_default();
    let nav_style = match session {
        Some(session) if session.has_navigation() => "",
        _ => "display: none;",
    };

    html! {
        <div
            class={classes!("lightbox", is_open.then_some("lightbox--open"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!is_open).to_string()}
        >
            <style>{LIGHTBOX_CSS}</style>
            <div class="lightbox__overlay" onclick={command(LightboxCommand::Close)}></div>
            <div class="lightbox__content">
                <button
                    class="lightbox__close"
                    aria-label="Schließen"
                    ref={close_ref}
                    onclick={command(LightboxCommand::Close)}
                >
                    {"×"}
                </button>
                <button
                    class="lightbox__prev"
                    aria-label="Vorheriges Bild"
                    style={nav_style}
                    onclick={command(LightboxCommand::Previous)}
                >
                    {"❮"}
                </button>
                <button
                    class="lightbox__next"
                    aria-label="Nächstes Bild"
                    style={nav_style}
                    onclick={command(LightboxCommand::Next)}
                >
                    {"❯"}
                </button>
                <div class="lightbox__image-container" role="group" aria-label={position}>
                    <img class="lightbox__image" src={src} alt={alt} />
                </div>
                <div class="lightbox__caption">{caption}</div>
            </div>
        </div>
    }
}
