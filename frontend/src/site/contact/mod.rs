//! Contact form with inline validation and a simulated submission.

pub mod validation;

use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config::SUBMIT_SIMULATION_MS;
use crate::dom;
use validation::{validate_field, validate_form, ContactValues, Field, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Editing,
    Sending,
    Sent,
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name *",
        Field::Email => "E-Mail *",
        Field::Phone => "Telefon",
        Field::Message => "Nachricht *",
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let values = use_state(ContactValues::default);
    let errors = use_state(BTreeMap::<Field, ValidationError>::new);
    let consent_error = use_state(|| None::<ValidationError>);
    let phase = use_state(|| Phase::Editing);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let message_ref = use_node_ref();
    let success_ref = use_node_ref();

    let field_ref = {
        let refs = [
            (Field::Name, name_ref.clone()),
            (Field::Email, email_ref.clone()),
            (Field::Phone, phone_ref.clone()),
            (Field::Message, message_ref.clone()),
        ];
        move |field: Field| {
            refs.iter()
                .find(|(candidate, _)| *candidate == field)
                .map(|(_, node)| node.clone())
                .unwrap_or_default()
        }
    };

    // Bring the thank-you note into view once it replaces the form.
    {
        let success_ref = success_ref.clone();
        use_effect_with_deps(
            move |phase| {
                if *phase == Phase::Sent {
                    if let Some(element) = success_ref.cast::<Element>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Center);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                || ()
            },
            *phase,
        );
    }

    let on_blur = {
        let values = values.clone();
        let errors = errors.clone();
        move |field: Field| {
            let values = values.clone();
            let errors = errors.clone();
            Callback::from(move |_: FocusEvent| {
                let mut next = (*errors).clone();
                match validate_field(field, values.get(field)) {
                    Ok(()) => {
                        next.remove(&field);
                    }
                    Err(error) => {
                        next.insert(field, error);
                    }
                }
                errors.set(next);
            })
        }
    };

    let on_input = {
        let values = values.clone();
        let errors = errors.clone();
        move |field: Field| {
            let values = values.clone();
            let errors = errors.clone();
            Callback::from(move |e: InputEvent| {
                let value = if field == Field::Message {
                    e.target_unchecked_into::<HtmlTextAreaElement>().value()
                } else {
                    e.target_unchecked_into::<HtmlInputElement>().value()
                };
                let mut next = (*values).clone();
                next.set(field, value);
                values.set(next);
                if errors.contains_key(&field) {
                    let mut cleared = (*errors).clone();
                    cleared.remove(&field);
                    errors.set(cleared);
                }
            })
        }
    };

    let on_consent = {
        let values = values.clone();
        Callback::from(move |e: Event| {
            let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
            let mut next = (*values).clone();
            next.consent = checked;
            values.set(next);
        })
    };

    let onsubmit = {
        let values = values.clone();
        let errors = errors.clone();
        let consent_error = consent_error.clone();
        let phase = phase.clone();
        let field_ref = field_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *phase != Phase::Editing {
                return;
            }

            let report = validate_form(&values);
            errors.set(report.errors.clone());
            consent_error.set(report.consent.clone());
            if !report.is_valid() {
                log::debug!("Contact form blocked: {} invalid fields", report.errors.len());
                if let Some(field) = report.first_invalid() {
                    if let Err(e) = dom::focus(&field_ref(field)) {
                        log::warn!("Failed to focus {} field: {}", field.name(), e);
                    }
                }
                return;
            }

            phase.set(Phase::Sending);
            let phase = phase.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_SIMULATION_MS).await;
                phase.set(Phase::Sent);
            });
        })
    };

    if *phase == Phase::Sent {
        return html! {
            <div class="contact-form">
                <div class="form-success" ref={success_ref}>
                    <strong>{"Vielen Dank für Ihre Nachricht!"}</strong>
                    <br />
                    {"Wir werden uns schnellstmöglich bei Ihnen melden."}
                </div>
            </div>
        };
    }

    let render_field = |field: Field| {
        let error = errors.get(&field);
        let value = values.get(field).to_string();
        let id = format!("contact-{}", field.name());
        let control = if field == Field::Message {
            html! {
                <textarea
                    id={id.clone()}
                    name={field.name()}
                    class={classes!("form-textarea", error.is_some().then_some("form-textarea--error"))}
                    rows="6"
                    required=true
                    ref={field_ref(field)}
                    value={value}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
            }
        } else {
            let kind = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                _ => "text",
            };
            html! {
                <input
                    id={id.clone()}
                    type={kind}
                    name={field.name()}
                    class={classes!("form-input", error.is_some().then_some("form-input--error"))}
                    required={field.is_required()}
                    ref={field_ref(field)}
                    value={value}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
            }
        };
        html! {
            <div class="form-group">
                <label class="form-label" for={id}>{label(field)}</label>
                {control}
                {
                    match error {
                        Some(error) => html! { <span class="form-error">{error.to_string()}</span> },
                        None => html! {},
                    }
                }
            </div>
        }
    };

    let sending = *phase == Phase::Sending;

    html! {
        <form id="contact-form" class="contact-form" novalidate=true {onsubmit}>
            { for Field::ALL.iter().map(|&field| render_field(field)) }
            <div class="form-group">
                <label class="form-checkbox">
                    <input
                        type="checkbox"
                        name="consent"
                        checked={values.consent}
                        onchange={on_consent}
                    />
                    <span>{"Ich habe die Datenschutzerklärung gelesen und stimme der Verarbeitung meiner Daten zu. *"}</span>
                </label>
                {
                    match &*consent_error {
                        Some(error) => html! { <span class="form-error">{error.to_string()}</span> },
                        None => html! {},
                    }
                }
            </div>
            <button type="submit" class="btn btn--primary" disabled={sending}>
                { if sending { "Wird gesendet..." } else { "Nachricht senden" } }
            </button>
        </form>
    }
}
