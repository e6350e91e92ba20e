use gloo_timers::callback::Timeout;
use web_sys::{
    window, Element, HtmlInputElement, KeyboardEvent, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config::LandingConfig;
use crate::quiz::controller::StepController;
use crate::quiz::form::{FieldKind, LeadField, LeadForm};
use crate::quiz::phone_mask::{blocks_backspace, format_phone};
use crate::quiz::state::{QuizAction, QuizState};

struct Question {
    title: &'static str,
    options: &'static [&'static str],
}

const QUESTIONS: [Question; 4] = [
    Question {
        title: "What are we renovating?",
        options: &["Apartment", "House", "Office", "Single room"],
    },
    Question {
        title: "What is the floor area?",
        options: &["Up to 40 m²", "40–80 m²", "80–150 m²", "Over 150 m²"],
    },
    Question {
        title: "Which finish level do you have in mind?",
        options: &["Cosmetic refresh", "Full renovation", "Designer renovation"],
    },
    Question {
        title: "When would you like to start?",
        options: &["This month", "In 1–3 months", "Later this year", "Just exploring"],
    },
];

/// Answer counts per step, with the lead step last.
fn step_options() -> Vec<usize> {
    QUESTIONS
        .iter()
        .map(|q| q.options.len())
        .chain(std::iter::once(0))
        .collect()
}

fn scroll_to_field(id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));

    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn step_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[derive(Properties, PartialEq)]
struct LeadFieldProps {
    field: LeadField,
    dispatch: Callback<QuizAction>,
    phone_prefix_len: usize,
}

#[function_component(LeadFieldView)]
fn lead_field_view(props: &LeadFieldProps) -> Html {
    let field = &props.field;
    let id = field.id;
    let invalid = field.invalid.then(|| "invalid");

    match field.kind {
        FieldKind::Text | FieldKind::Email => {
            let oninput = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    dispatch.emit(QuizAction::EditText { id, value });
                })
            };
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            html! {
                <input
                    id={id}
                    name={id}
                    type={input_type}
                    class={classes!("quiz-input", invalid)}
                    placeholder={field.label}
                    value={field.text().to_string()}
                    {oninput}
                />
            }
        }
        FieldKind::Phone => {
            let oninput = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    let value = format_phone(&input.value());
                    input.set_value(&value);
                    dispatch.emit(QuizAction::EditText { id, value });
                })
            };
            let onkeydown = {
                let prefix_len = props.phone_prefix_len;
                Callback::from(move |e: KeyboardEvent| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    if e.key() == "Backspace" && blocks_backspace(&input.value(), prefix_len) {
                        e.prevent_default();
                    }
                })
            };
            html! {
                <input
                    id={id}
                    name={id}
                    type="tel"
                    class={classes!("quiz-input", invalid)}
                    placeholder="+7 (___) ___-__-__"
                    value={field.text().to_string()}
                    {oninput}
                    {onkeydown}
                />
            }
        }
        FieldKind::Consent => {
            let onchange = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: Event| {
                    let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                    dispatch.emit(QuizAction::SetChecked { id, checked });
                })
            };
            // Clicks on the wrapper text toggle the box; clicks on the box itself
            // are handled by its own change event.
            let onclick = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: MouseEvent| {
                    let on_checkbox = e
                        .target_dyn_into::<Element>()
                        .map(|el| el.id() == id)
                        .unwrap_or(false);
                    if !on_checkbox {
                        dispatch.emit(QuizAction::ToggleChecked(id));
                    }
                })
            };
            html! {
                <div class={classes!("input-wrapper", invalid)} {onclick}>
                    <input id={id} name={id} type="checkbox" checked={field.checked()} {onchange} />
                    <span class="consent-text">{field.label}</span>
                </div>
            }
        }
        FieldKind::Submit => html! {
            <input id={id} type="submit" class="quiz-submit" value={field.label} />
        },
    }
}

#[function_component(Quiz)]
pub fn quiz() -> Html {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let state = use_reducer(|| {
        QuizState::new(
            StepController::initialize(step_options()),
            LeadForm::lead_capture(),
        )
    });

    // Advance once the click acknowledgement has had time to render.
    {
        let in_flight = state.controller.in_flight_ticket();
        let state = state.clone();
        let delay = config.transition_delay_ms;
        use_effect_with_deps(
            move |ticket| {
                let timeout = ticket.map(|ticket| {
                    Timeout::new(delay, move || {
                        state.dispatch(QuizAction::TransitionElapsed(ticket));
                    })
                });
                move || drop(timeout)
            },
            in_flight,
        );
    }

    {
        let target = state.scroll_target;
        use_effect_with_deps(
            move |request| {
                if *request > 0 {
                    if let Some(id) = target {
                        scroll_to_field(id);
                    }
                }
                || ()
            },
            state.scroll_request,
        );
    }

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            let decision = state.decide_submit();
            if decision.prevents_default() {
                e.prevent_default();
            } else {
                log::info!("lead form valid, submitting");
            }
            state.dispatch(QuizAction::Submitted(decision));
        })
    };

    let controller = &state.controller;
    let step_count = controller.step_count();

    let question_steps = QUESTIONS.iter().enumerate().map(|(step, question)| {
        let answers = question.options.iter().enumerate().map(|(option, title)| {
            let onclick = {
                let state = state.clone();
                Callback::from(move |_: MouseEvent| {
                    state.dispatch(QuizAction::Answer { step, option });
                })
            };
            let selected = controller.answer(step) == Some(option);
            html! {
                <div class={classes!("quiz-answer", selected.then(|| "selected"))} {onclick}>
                    <input type="radio" name={format!("step-{}", step + 1)} value={*title} checked={selected} />
                    <span>{*title}</span>
                </div>
            }
        });

        html! {
            <div
                class={classes!("quiz-step", format!("quiz-step-{}", step + 1))}
                style={step_style(controller.is_visible(step))}
            >
                <p class="quiz-progress">{format!("Question {} of {}", step + 1, step_count - 1)}</p>
                <h3>{question.title}</h3>
                <div class="quiz-answers">{ for answers }</div>
            </div>
        }
    });

    let lead_step = step_count - 1;
    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: QuizAction| state.dispatch(action))
    };
    let lead_fields = state.form.fields().iter().map(|field| {
        html! {
            <LeadFieldView
                field={field.clone()}
                dispatch={dispatch.clone()}
                phone_prefix_len={config.phone_prefix_len}
            />
        }
    });

    html! {
        <section id="quiz" class="quiz-section">
            <h2>{"Get a renovation estimate in one minute"}</h2>
            <form class="quiz-form" action={config.form_action.clone()} method={config.form_method.clone()} {onsubmit}>
                { for question_steps }
                <div
                    class={classes!("quiz-step", format!("quiz-step-{}", lead_step + 1))}
                    style={step_style(controller.is_visible(lead_step))}
                >
                    <h3>{"Where should we send your estimate?"}</h3>
                    { for lead_fields }
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{step_options, QUESTIONS};

    #[test]
    fn quiz_has_four_questions_and_a_lead_step() {
        let options = step_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options.last(), Some(&0));
        assert!(options[..4].iter().all(|&n| n > 0));
        assert_eq!(options[0], QUESTIONS[0].options.len());
    }
}
