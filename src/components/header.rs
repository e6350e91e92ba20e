use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

/// The header switches to its compact style as soon as the page moves.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Popup {
    open: bool,
}

impl Popup {
    pub fn opened() -> Self {
        Self { open: true }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Escape closes an open popup; any other key leaves it as it is.
    pub fn after_key(self, key: &str) -> Self {
        if self.open && key == "Escape" {
            Self::closed()
        } else {
            self
        }
    }
}

const NAV_LINKS: [(&str, &str); 4] = [
    ("#quiz", "Estimate"),
    ("#services", "Services"),
    ("#reviews", "Reviews"),
    ("#faq", "FAQ"),
];

fn nav_links() -> Html {
    html! {
        <>
            { for NAV_LINKS.iter().map(|(href, title)| html! {
                <a class="nav-link" href={*href}>{*title}</a>
            }) }
        </>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| false);
    let popup = use_state_eq(Popup::closed);
    let popup_ref = use_node_ref();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let update = {
                        let window = window.clone();
                        move || {
                            let scroll_y = window.scroll_y().unwrap_or(0.0);
                            scrolled.set(is_scrolled(scroll_y));
                        }
                    };
                    // Initial check
                    update();

                    let callback = Closure::<dyn Fn()>::new(update);
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let popup = popup.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let next = popup.after_key(&e.key());
            if next != *popup {
                log::debug!("popup closed with Escape");
                popup.set(next);
            }
        });
    }

    let open_popup = {
        let popup = popup.clone();
        Callback::from(move |_: MouseEvent| popup.set(Popup::opened()))
    };

    let close_popup = {
        let popup = popup.clone();
        Callback::from(move |_: MouseEvent| popup.set(Popup::closed()))
    };

    // Only a click on the backdrop itself closes; clicks inside the panel bubble up here too.
    let backdrop_click = {
        let popup = popup.clone();
        let popup_ref = popup_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == popup_ref.cast::<Element>() {
                popup.set(Popup::closed());
            }
        })
    };

    html! {
        <>
            <header class={classes!("site-header", (*scrolled).then(|| "scrolled"))}>
                <div class="header-content">
                    <a class="header-logo" href="#top">{"Brightline"}</a>
                    <nav class="header-nav">{ nav_links() }</nav>
                    <a class="header-phone" href="tel:+78000000000">{"+7 (800) 000-00-00"}</a>
                    <button class="button-popup-menu" onclick={open_popup}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <div
                ref={popup_ref}
                class={classes!("header-popup", popup.is_open().then(|| "show"))}
                onclick={backdrop_click}
            >
                <div class="header-popup-panel">
                    <button class="button-popup-close" onclick={close_popup.clone()}>{"×"}</button>
                    <nav class="header-popup-nav" onclick={close_popup}>{ nav_links() }</nav>
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::{is_scrolled, Popup};

    #[test]
    fn scrolled_only_past_the_top() {
        assert!(!is_scrolled(0.0));
        assert!(is_scrolled(0.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn escape_closes_only_an_open_popup() {
        assert_eq!(Popup::opened().after_key("Escape"), Popup::closed());
        assert_eq!(Popup::closed().after_key("Escape"), Popup::closed());
        assert_eq!(Popup::opened().after_key("Enter"), Popup::opened());
    }
}
