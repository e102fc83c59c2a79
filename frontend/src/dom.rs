use web_sys::{Document, HtmlElement, Window};
use yew::NodeRef;

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::MissingNode("document"))
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?.body().ok_or(UiError::MissingNode("body"))
}

/// Locks or releases page scrolling behind a modal.
pub fn set_scroll_locked(locked: bool) -> Result<(), UiError> {
    let style = body()?.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

pub fn focus(node: &NodeRef) -> Result<(), UiError> {
    let element = node
        .cast::<HtmlElement>()
        .ok_or(UiError::MissingNode("focus target"))?;
    element.focus()?;
    Ok(())
}
