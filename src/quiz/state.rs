use std::rc::Rc;

use yew::prelude::*;

use crate::quiz::controller::{Selection, StepController, Ticket};
use crate::quiz::form::{FieldId, LeadForm};
use crate::quiz::gate::{self, SubmitDecision};

pub enum QuizAction {
    Answer { step: usize, option: usize },
    TransitionElapsed(Ticket),
    EditText { id: FieldId, value: String },
    SetChecked { id: FieldId, checked: bool },
    ToggleChecked(FieldId),
    Submitted(SubmitDecision),
}

/// Everything the quiz component renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizState {
    pub controller: StepController,
    pub form: LeadForm,
    /// Bumped on every rejected terminal submission so the component can
    /// scroll to `scroll_target` after the marks are rendered.
    pub scroll_request: u32,
    pub scroll_target: Option<FieldId>,
}

impl QuizState {
    pub fn new(controller: StepController, form: LeadForm) -> Self {
        Self {
            controller,
            form,
            scroll_request: 0,
            scroll_target: None,
        }
    }

    /// The decision for a submit event arriving right now.
    pub fn decide_submit(&self) -> SubmitDecision {
        gate::decide(&self.controller, &self.form)
    }
}

impl Reducible for QuizState {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            QuizAction::Answer { step, option } => {
                if let Selection::Dropped = next.controller.select_answer(step, option) {
                    return self;
                }
            }
            QuizAction::TransitionElapsed(ticket) => {
                next.controller.finish_transition(ticket);
            }
            QuizAction::EditText { id, value } => next.form.set_text(id, value),
            QuizAction::SetChecked { id, checked } => next.form.set_checked(id, checked),
            QuizAction::ToggleChecked(id) => next.form.toggle(id),
            QuizAction::Submitted(decision) => {
                gate::apply(&decision, &mut next.form);
                if let Some(first) = decision.first_invalid() {
                    log::info!("lead form rejected, first invalid field: {}", first);
                    next.scroll_request = next.scroll_request.wrapping_add(1);
                    next.scroll_target = Some(first);
                }
            }
        }

        next.into()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::functional::Reducible;

    use super::{QuizAction, QuizState};
    use crate::quiz::controller::StepController;
    use crate::quiz::form::LeadForm;

    fn state() -> Rc<QuizState> {
        Rc::new(QuizState::new(
            StepController::initialize(vec![3, 3, 3, 3, 0]),
            LeadForm::lead_capture(),
        ))
    }

    fn answer_and_wait(state: Rc<QuizState>, step: usize) -> Rc<QuizState> {
        let state = state.reduce(QuizAction::Answer { step, option: 1 });
        let ticket = state.controller.in_flight_ticket().expect("transition started");
        state.reduce(QuizAction::TransitionElapsed(ticket))
    }

    #[test]
    fn synthetic_clicks_walk_the_quiz_to_the_lead_step() {
        let mut state = state();
        for step in 0..4 {
            state = answer_and_wait(state, step);
        }
        assert!(state.controller.is_terminal());
        assert!(state.controller.is_visible(4));
        assert_eq!(state.controller.answer(2), Some(1));
    }

    #[test]
    fn double_click_keeps_the_first_answer_and_one_advance() {
        let state = state();
        let state = state.reduce(QuizAction::Answer { step: 0, option: 0 });
        let ticket = state.controller.in_flight_ticket().expect("transition started");
        let state = state.reduce(QuizAction::Answer { step: 0, option: 2 });
        let state = state.reduce(QuizAction::TransitionElapsed(ticket));
        let state = state.reduce(QuizAction::TransitionElapsed(ticket));

        assert_eq!(state.controller.current(), 1);
        assert_eq!(state.controller.answer(0), Some(0));
    }

    #[test]
    fn rejected_submit_marks_fields_and_requests_scroll() {
        let mut state = state();
        for step in 0..4 {
            state = answer_and_wait(state, step);
        }
        state = state.reduce(QuizAction::EditText {
            id: "lead-email",
            value: "anna@example.com".to_string(),
        });

        let decision = state.decide_submit();
        assert!(decision.prevents_default());
        let state = state.reduce(QuizAction::Submitted(decision));

        assert_eq!(state.form.marked(), vec!["lead-name", "lead-phone", "lead-consent"]);
        assert_eq!(state.scroll_request, 1);
        assert_eq!(state.scroll_target, Some("lead-name"));

        let state = state.reduce(QuizAction::ToggleChecked("lead-consent"));
        assert_eq!(state.form.marked(), vec!["lead-name", "lead-phone"]);
    }

    #[test]
    fn early_submit_is_cancelled_without_marks_or_scroll() {
        let state = state();
        let decision = state.decide_submit();
        assert!(decision.prevents_default());
        let state = state.reduce(QuizAction::Submitted(decision));
        assert!(state.form.marked().is_empty());
        assert_eq!(state.scroll_request, 0);
    }
}
