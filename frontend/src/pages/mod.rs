use yew::prelude::*;

pub mod contact;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod services;

/// Every page starts at the top when navigated to.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
