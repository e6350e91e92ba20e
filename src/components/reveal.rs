use gloo_timers::callback::Timeout;
use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::LandingConfig;

/// True when any part of the box `[top, bottom]` is inside a viewport of
/// the given height.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= viewport_height && bottom >= 0.0
}

/// Reveal is one-way: once animated a section never hides again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Pending,
    Animated,
}

impl Reveal {
    /// Whether seeing the section now should start the reveal timer.
    pub fn starts_on_sight(self) -> bool {
        self == Reveal::Hidden
    }

    pub fn is_animated(self) -> bool {
        self == Reveal::Animated
    }
}

fn in_view(node: &NodeRef) -> bool {
    let (Some(element), Some(window)) = (node.cast::<Element>(), window()) else {
        return false;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    intersects_viewport(rect.top(), rect.bottom(), viewport_height)
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let node = use_node_ref();
    let reveal = use_state_eq(|| Reveal::Hidden);

    let check = {
        let node = node.clone();
        let reveal = reveal.clone();
        let delay = config.reveal_delay_ms;
        move || {
            if !reveal.starts_on_sight() || !in_view(&node) {
                return;
            }
            reveal.set(Reveal::Pending);
            let reveal = reveal.clone();
            Timeout::new(delay, move || reveal.set(Reveal::Animated)).forget();
        }
    };

    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| check());

    html! {
        <div
            ref={node}
            class={classes!("animate-section", reveal.is_animated().then(|| "animated"))}
            data-animated={reveal.is_animated().then(|| AttrValue::from("true"))}
        >
            { for props.children.iter() }
        </div>
    }
}
