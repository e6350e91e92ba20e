use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::LandingConfig;

/// Rotation of the wheel image, in degrees, for each tab.
const ROTATION_OFFSETS: [(u8, i32); 7] = [
    (1, -14),
    (2, 14),
    (3, 38),
    (4, 82),
    (5, 106),
    (6, 132),
    (7, 164),
];

const TABS: [(&str, &str); 7] = [
    ("Site visit", "A foreman measures every room and photographs the existing state."),
    ("Estimate", "You get an itemised estimate with materials and labour priced separately."),
    ("Contract", "Fixed price, fixed dates and a penalty clause for every day of delay."),
    ("Rough work", "Demolition, wiring, plumbing and screed, checked by our engineer."),
    ("Finishing", "Plaster, tiling, flooring and painting by a dedicated crew."),
    ("Clean-up", "We remove every bag of debris and do a professional clean."),
    ("Handover", "You walk the flat with the foreman and sign off item by item."),
];

#[derive(Clone, Debug, PartialEq)]
pub struct TabSwitcher {
    active: u8,
    animating: bool,
    offsets: BTreeMap<u8, i32>,
}

impl Default for TabSwitcher {
    fn default() -> Self {
        Self {
            active: 1,
            animating: false,
            offsets: ROTATION_OFFSETS.into_iter().collect(),
        }
    }
}

impl TabSwitcher {
    pub fn active(&self) -> u8 {
        self.active
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn rotation(&self) -> i32 {
        self.offsets.get(&self.active).copied().unwrap_or(0)
    }

    /// Can `id` be switched to right now?
    pub fn accepts(&self, id: u8) -> bool {
        !self.animating && id != self.active && self.offsets.contains_key(&id)
    }

    /// Activates `id` and returns the new rotation. Refused while the
    /// previous rotation is still animating, for the active tab, and for
    /// unknown ids.
    pub fn switch(&mut self, id: u8) -> Option<i32> {
        if !self.accepts(id) {
            return None;
        }
        self.active = id;
        self.animating = true;
        Some(self.rotation())
    }

    pub fn finish_animation(&mut self) {
        self.animating = false;
    }

    pub fn set_rotation_offset(&mut self, id: u8, degrees: i32) {
        self.offsets.insert(id, degrees);
    }
}

pub enum TabAction {
    Switch(u8),
    AnimationDone,
}

impl Reducible for TabSwitcher {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TabAction::Switch(id) => {
                if next.switch(id).is_none() {
                    return self;
                }
            }
            TabAction::AnimationDone => next.finish_animation(),
        }
        next.into()
    }
}

#[function_component(TabsBlock)]
pub fn tabs_block() -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let tabs = {
        let overrides = config.tab_rotations.clone();
        use_reducer(move || {
            let mut tabs = TabSwitcher::default();
            for (id, degrees) in overrides {
                tabs.set_rotation_offset(id, degrees);
            }
            tabs
        })
    };

    let buttons = TABS.iter().enumerate().map(|(index, (title, _))| {
        let id = index as u8 + 1;
        let onclick = {
            let tabs = tabs.clone();
            let animation_ms = config.tab_animation_ms;
            Callback::from(move |_: MouseEvent| {
                if !tabs.accepts(id) {
                    return;
                }
                tabs.dispatch(TabAction::Switch(id));
                let tabs = tabs.clone();
                Timeout::new(animation_ms, move || tabs.dispatch(TabAction::AnimationDone)).forget();
            })
        };
        html! {
            <button
                class={classes!("nav-button", (tabs.active() == id).then(|| "active"))}
                data-tab-id={id.to_string()}
                {onclick}
            >
                {*title}
            </button>
        }
    });

    let panels = TABS.iter().enumerate().map(|(index, (title, text))| {
        let id = index as u8 + 1;
        html! {
            <div class={classes!("tab-panel", (tabs.active() == id).then(|| "active"))} data-tab-id={id.to_string()}>
                <h3>{*title}</h3>
                <p>{*text}</p>
            </div>
        }
    });

    let image_style = format!(
        "transform: rotate({}deg); transition: transform {}ms;",
        tabs.rotation(),
        config.tab_animation_ms
    );

    html! {
        <section id="services" class="tabs-block">
            <h2>{"How we work"}</h2>
            <div class="tabs-nav">{ for buttons }</div>
            <div class="tabs-body">
                <div class="tab-panel-image">
                    <img src="/assets/wheel.png" alt="Stages of work" style={image_style} />
                </div>
                <div class="tab-panels">{ for panels }</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::TabSwitcher;

    #[test]
    fn starts_on_first_tab_rotated_back() {
        let tabs = TabSwitcher::default();
        assert_eq!(tabs.active(), 1);
        assert_eq!(tabs.rotation(), -14);
    }

    #[test]
    fn switching_rotates_and_blocks_until_animation_ends() {
        let mut tabs = TabSwitcher::default();
        assert_eq!(tabs.switch(4), Some(82));
        assert!(tabs.is_animating());
        assert_eq!(tabs.switch(7), None);
        assert_eq!(tabs.active(), 4);

        tabs.finish_animation();
        assert_eq!(tabs.switch(7), Some(164));
    }

    #[test]
    fn active_and_unknown_tabs_are_refused() {
        let mut tabs = TabSwitcher::default();
        assert_eq!(tabs.switch(1), None);
        assert_eq!(tabs.switch(9), None);
        assert!(!tabs.is_animating());
    }

    #[test]
    fn rotation_offsets_can_be_overridden() {
        let mut tabs = TabSwitcher::default();
        tabs.set_rotation_offset(2, 20);
        assert_eq!(tabs.switch(2), Some(20));
    }
}
