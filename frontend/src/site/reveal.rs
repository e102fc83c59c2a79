use yew::prelude::*;

use crate::config::MotionPreference;
use crate::site::viewport::{watch_node, REVEAL_OPTIONS};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its content in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let motion = use_context::<MotionPreference>().unwrap_or_default();
    let visible = use_state(|| motion.is_reduced());
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let watch = if *visible {
                    None
                } else {
                    let on_enter = {
                        let visible = visible.clone();
                        move || visible.set(true)
                    };
                    match watch_node(&node, "reveal", REVEAL_OPTIONS, on_enter) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            log::debug!("Showing content without reveal: {}", e);
                            visible.set(true);
                            None
                        }
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("animate", (*visible).then_some("animate--visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
