use yew::prelude::*;

use crate::config::LandingConfig;

const LINE: [&str; 5] = [
    "Fixed price",
    "3-year warranty",
    "Own crews, no subcontractors",
    "Daily photo reports",
    "Handover on schedule",
];

/// The template line followed by `clones` copies, enough to loop the CSS
/// animation without a visible seam.
pub fn line_copies(clones: usize) -> usize {
    clones + 1
}

fn running_line(copy: usize) -> Html {
    html! {
        <div class="running-line" key={copy} aria-hidden={(copy > 0).then(|| AttrValue::from("true"))}>
            { for LINE.iter().map(|item| html! { <span class="running-line-item">{*item}</span> }) }
        </div>
    }
}

#[function_component(Marquee)]
pub fn marquee() -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();

    html! {
        <div class="running-line-wrapper">
            { for (0..line_copies(config.marquee_clones)).map(running_line) }
        </div>
    }
}
