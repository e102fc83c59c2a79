use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::MotionPreference;
use crate::gallery::filter::{active_control, FilterToken};
use crate::gallery::item::load_manifest;
use crate::gallery::lightbox::{LightboxCommand, LightboxState};
use crate::gallery::state::{GalleryAction, GalleryState, LoadStatus};
use crate::gallery::viewer::Lightbox;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let state = use_reducer(GalleryState::default);
    let lightbox = use_reducer(LightboxState::default);

    // Items are loaded once; nothing added later is picked up.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match load_manifest().await {
                        Ok(manifest) => {
                            log::debug!("Loaded {} gallery items", manifest.items.len());
                            state.dispatch(GalleryAction::Loaded(manifest));
                        }
                        Err(e) => {
                            log::error!("Failed to load gallery: {}", e);
                            state.dispatch(GalleryAction::LoadFailed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // Time the deferred patches of the current filter generation. A newer
    // generation re-runs this effect, and dropping the old timers cancels them.
    {
        let dispatcher = state.clone();
        let pending = state.pending.clone();
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = pending
                    .iter()
                    .cloned()
                    .map(|scheduled| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(scheduled.delay_ms, move || {
                            dispatcher.dispatch(GalleryAction::Settle(scheduled));
                        })
                    })
                    .collect();
                move || drop(timers)
            },
            state.generation,
        );
    }

    let on_filter = {
        let state = state.clone();
        Callback::from(move |token: String| {
            state.dispatch(GalleryAction::ApplyFilter {
                token: FilterToken::parse(&token),
                motion,
            });
        })
    };

    let on_activate = {
        let state = state.clone();
        let lightbox = lightbox.clone();
        Callback::from(move |item: usize| {
            lightbox.dispatch(LightboxCommand::Open {
                item,
                snapshot: state.visible_snapshot(),
            });
        })
    };

    let on_command = {
        let lightbox = lightbox.clone();
        Callback::from(move |command: LightboxCommand| lightbox.dispatch(command))
    };

    let grid = match state.status {
        LoadStatus::Loading => html! {
            <p class="gallery-status">{"Galerie wird geladen..."}</p>
        },
        LoadStatus::Failed => html! {
            <p class="gallery-status">{"Die Galerie konnte nicht geladen werden."}</p>
        },
        LoadStatus::Ready => html! {
            <div class="gallery-grid">
                {
                    state.items.iter().zip(state.presentations.iter()).enumerate().map(|(index, (item, presentation))| {
                        let onclick = {
                            let on_activate = on_activate.clone();
                            Callback::from(move |_: MouseEvent| on_activate.emit(index))
                        };
                        let onkeydown = {
                            let on_activate = on_activate.clone();
                            Callback::from(move |e: KeyboardEvent| {
                                let key = e.key();
                                if key == "Enter" || key == " " {
                                    e.prevent_default();
                                    on_activate.emit(index);
                                }
                            })
                        };
                        html! {
                            <div
                                class="gallery-item"
                                key={index}
                                data-category={item.category.clone()}
                                data-full-image={item.full_image.clone()}
                                data-visible={presentation.marker.to_string()}
                                style={presentation.style()}
                                tabindex="0"
                                role="button"
                                {onclick}
                                {onkeydown}
                            >
                                <img src={item.thumbnail.clone()} alt={item.alt.clone()} loading="lazy" />
                                {
                                    if let Some(title) = &item.title {
                                        html! {
                                            <div class="gallery-item__overlay">
                                                <span class="gallery-item__title">{title}</span>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        },
    };

    let active_index = active_control(&state.controls, &state.filter);

    html! {
        <div class="gallery">
            <div class="gallery-filter" role="group" aria-label="Galerie filtern">
                {
                    state.controls.iter().enumerate().map(|(position, control)| {
                        let active = active_index == Some(position);
                        let onclick = {
                            let on_filter = on_filter.clone();
                            let token = control.token.clone();
                            Callback::from(move |_: MouseEvent| on_filter.emit(token.clone()))
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("filter-btn", active.then_some("filter-btn--active"))}
                                data-filter={control.token.clone()}
                                aria-pressed={active.to_string()}
                                {onclick}
                            >
                                {&control.label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            {grid}
            <Lightbox
                items={state.items.clone()}
                state={(*lightbox).clone()}
                {on_command}
            />
        </div>
    }
}
