use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Pointer-drag state of a horizontally scrollable container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragScroll {
    anchor: Option<(f64, f64)>,
}

impl DragScroll {
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Remembers where the drag started, relative to the container, and the
    /// scroll offset at that moment.
    pub fn press(&mut self, page_x: f64, offset_left: f64, scroll_left: f64) {
        self.anchor = Some((page_x - offset_left, scroll_left));
    }

    /// The scroll offset that keeps the content under the pointer, or `None`
    /// when no button is held.
    pub fn drag_to(&self, page_x: f64, offset_left: f64) -> Option<f64> {
        let (start_x, start_scroll) = self.anchor?;
        let walk = (page_x - offset_left) - start_x;
        Some(start_scroll - walk)
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }
}

const BENEFITS: [(&str, &str); 5] = [
    ("Fixed estimate", "The price is agreed before work starts and written into the contract."),
    ("Own crews", "Every trade is done by our staff, never by a subcontractor."),
    ("Engineer control", "An engineer signs off each stage before the next one starts."),
    ("Photo reports", "You get photos of the day's work every evening."),
    ("Warranty", "Three years on everything we build."),
];

#[function_component(BenefitsCards)]
pub fn benefits_cards() -> Html {
    let container = use_node_ref();
    // Only the cursor class re-renders; the anchor lives outside component state.
    let drag = use_mut_ref(DragScroll::default);
    let grabbing = use_state_eq(|| false);

    let onmousedown = {
        let container = container.clone();
        let drag = drag.clone();
        let grabbing = grabbing.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = container.cast::<HtmlElement>() else {
                return;
            };
            e.prevent_default();
            drag.borrow_mut()
                .press(e.page_x() as f64, el.offset_left() as f64, el.scroll_left() as f64);
            grabbing.set(true);
        })
    };

    let release = {
        let drag = drag.clone();
        let grabbing = grabbing.clone();
        Callback::from(move |_: MouseEvent| {
            drag.borrow_mut().release();
            grabbing.set(false);
        })
    };

    let onmousemove = {
        let container = container.clone();
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = container.cast::<HtmlElement>() else {
                return;
            };
            if let Some(scroll_left) = drag.borrow().drag_to(e.page_x() as f64, el.offset_left() as f64) {
                e.prevent_default();
                el.set_scroll_left(scroll_left as i32);
            }
        })
    };

    let cards = BENEFITS.iter().map(|(title, text)| {
        html! {
            <article class="benefit-card">
                <h3>{*title}</h3>
                <p>{*text}</p>
            </article>
        }
    });

    html! {
        <section class="benefits">
            <h2>{"Why clients choose us"}</h2>
            <div
                ref={container}
                class={classes!("benefits-cards", (*grabbing).then(|| "grabbing"))}
                style={if *grabbing { "cursor: grabbing;" } else { "cursor: grab;" }}
                {onmousedown}
                onmouseup={release.clone()}
                onmouseleave={release}
                {onmousemove}
            >
                { for cards }
            </div>
        </section>
    }
}
