use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// At most one item is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Closes `index` if it is open, otherwise opens it and closes the rest.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

const FAQ: [(&str, &str); 5] = [
    (
        "Is the estimate final?",
        "Yes. The price in the signed estimate only changes if you add work yourself.",
    ),
    (
        "Do you buy the materials?",
        "We can, at trade prices with receipts, or work with materials you supply.",
    ),
    (
        "How long does a typical flat take?",
        "A full renovation of a two-room flat usually takes eight to ten weeks.",
    ),
    (
        "Is there a warranty?",
        "Three years on all work, written into the contract.",
    ),
    (
        "Can I live there during the works?",
        "For cosmetic refreshes, yes. For full renovations we recommend moving out.",
    ),
];

fn content_height(content: &NodeRef, open: bool) -> String {
    if !open {
        return "height: 0;".to_string();
    }
    let height = content.cast::<Element>().map(|el| el.scroll_height()).unwrap_or(0);
    format!("height: {}px;", height)
}

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let accordion = use_state_eq(Accordion::default);
    let contents = use_state(|| FAQ.iter().map(|_| NodeRef::default()).collect::<Vec<_>>());

    let items = FAQ.iter().enumerate().map(|(index, (question, answer))| {
        let toggle = {
            let accordion = accordion.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                accordion.set(accordion.toggle(index));
            })
        };
        let open = accordion.is_open(index);
        let content = contents[index].clone();

        html! {
            <div class={classes!("accordion-item", open.then(|| "active"))}>
                <button class="accordion-item-header" onclick={toggle}>
                    <span>{*question}</span>
                    <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                </button>
                <div ref={content.clone()} class="accordion-item-content" style={content_height(&content, open)}>
                    <p>{*answer}</p>
                </div>
            </div>
        }
    });

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Questions we hear most"}</h2>
            <div class="accordion">{ for items }</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::Accordion;

    #[test]
    fn opening_one_closes_the_others() {
        let accordion = Accordion::default().toggle(1).toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let accordion = Accordion::default().toggle(2).toggle(2);
        assert!((0..5).all(|i| !accordion.is_open(i)));
    }
}
