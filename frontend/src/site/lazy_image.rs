use yew::prelude::*;

use crate::site::viewport::{watch_node, LAZY_IMAGE_OPTIONS};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An image whose `src` is only set once it nears the viewport. Browsers
/// without `IntersectionObserver` load it right away.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let loaded = use_state(|| false);
    let node = use_node_ref();

    {
        let loaded = loaded.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let on_enter = {
                    let loaded = loaded.clone();
                    move || loaded.set(true)
                };
                let watch = watch_node(&node, "lazy image", LAZY_IMAGE_OPTIONS, on_enter);
                let watch = match watch {
                    Ok(watch) => Some(watch),
                    Err(e) => {
                        log::debug!("Loading image eagerly: {}", e);
                        loaded.set(true);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    let (src, data_src) = if *loaded {
        (Some(props.src.clone()), None)
    } else {
        (None, Some(props.src.clone()))
    };

    html! {
        <img
            ref={node}
            class={props.class.clone()}
            src={src}
            data-src={data_src}
            alt={props.alt.clone()}
        />
    }
}
