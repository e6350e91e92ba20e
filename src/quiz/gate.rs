use crate::quiz::controller::StepController;
use crate::quiz::form::{FieldId, FieldKind, LeadField, LeadForm};
use crate::quiz::validate::{is_valid_email, is_valid_phone};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CancelReason {
    /// Only the terminal step may submit.
    NotTerminal,
    /// Invalid fields in document order; never empty.
    Invalid(Vec<FieldId>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    Allow,
    Cancel(CancelReason),
}

impl SubmitDecision {
    pub fn prevents_default(&self) -> bool {
        matches!(self, SubmitDecision::Cancel(_))
    }

    /// The field to scroll into view after a rejected submission.
    pub fn first_invalid(&self) -> Option<FieldId> {
        match self {
            SubmitDecision::Cancel(CancelReason::Invalid(fields)) => fields.first().copied(),
            _ => None,
        }
    }
}

fn field_is_valid(field: &LeadField) -> bool {
    match field.kind {
        FieldKind::Phone => is_valid_phone(field.text()),
        FieldKind::Email => {
            let value = field.text();
            !value.trim().is_empty() && is_valid_email(value)
        }
        FieldKind::Text => !field.text().trim().is_empty(),
        FieldKind::Consent => field.checked(),
        FieldKind::Submit => true,
    }
}

/// Invalid terminal-step fields in document order.
pub fn validate(form: &LeadForm) -> Vec<FieldId> {
    form.fields()
        .iter()
        .filter(|field| !field_is_valid(field))
        .map(|field| field.id)
        .collect()
}

/// Decides what happens to a native submit event. Pure: marks are applied
/// separately with [`apply`].
pub fn decide(controller: &StepController, form: &LeadForm) -> SubmitDecision {
    if !controller.is_terminal() {
        return SubmitDecision::Cancel(CancelReason::NotTerminal);
    }

    let invalid = validate(form);
    if invalid.is_empty() {
        SubmitDecision::Allow
    } else {
        SubmitDecision::Cancel(CancelReason::Invalid(invalid))
    }
}

/// Clears every previous mark, then marks the fields the decision rejected.
/// A decision made off the terminal step leaves the marks alone.
pub fn apply(decision: &SubmitDecision, form: &mut LeadForm) {
    match decision {
        SubmitDecision::Cancel(CancelReason::NotTerminal) => {}
        SubmitDecision::Allow => form.clear_marks(),
        SubmitDecision::Cancel(CancelReason::Invalid(fields)) => {
            form.clear_marks();
            for id in fields {
                form.mark(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, decide, CancelReason, SubmitDecision};
    use crate::quiz::controller::{Selection, StepController};
    use crate::quiz::form::LeadForm;

    fn on_terminal_step() -> StepController {
        let mut controller = StepController::initialize(vec![2, 2, 2, 2, 0]);
        for step in 0..4 {
            if let Selection::Started(ticket) = controller.select_answer(step, 0) {
                controller.finish_transition(ticket);
            }
        }
        assert!(controller.is_terminal());
        controller
    }

    fn filled_form() -> LeadForm {
        let mut form = LeadForm::lead_capture();
        form.set_text("lead-name", "Anna".to_string());
        form.set_text("lead-phone", "+7 (999) 123-45-67".to_string());
        form.set_text("lead-email", "anna@example.com".to_string());
        form.set_checked("lead-consent", true);
        form
    }

    #[test]
    fn non_terminal_submit_is_always_cancelled() {
        let controller = StepController::initialize(vec![2, 2, 2, 2, 0]);
        let decision = decide(&controller, &filled_form());
        assert_eq!(decision, SubmitDecision::Cancel(CancelReason::NotTerminal));
        assert!(decision.prevents_default());
        assert_eq!(decision.first_invalid(), None);
    }

    #[test]
    fn valid_terminal_submit_is_allowed() {
        let controller = on_terminal_step();
        let decision = decide(&controller, &filled_form());
        assert_eq!(decision, SubmitDecision::Allow);
        assert!(!decision.prevents_default());
    }

    #[test]
    fn empty_name_bad_phone_and_no_consent_are_marked() {
        let controller = on_terminal_step();
        let mut form = filled_form();
        form.set_text("lead-name", "   ".to_string());
        form.set_text("lead-phone", "+7 (999".to_string());
        form.set_checked("lead-consent", false);

        let decision = decide(&controller, &form);
        assert!(decision.prevents_default());
        assert_eq!(decision.first_invalid(), Some("lead-name"));

        apply(&decision, &mut form);
        assert_eq!(form.marked(), vec!["lead-name", "lead-phone", "lead-consent"]);
    }

    #[test]
    fn empty_or_malformed_email_is_invalid() {
        let controller = on_terminal_step();
        let mut form = filled_form();
        form.set_text("lead-email", "  ".to_string());
        assert_eq!(
            decide(&controller, &form),
            SubmitDecision::Cancel(CancelReason::Invalid(vec!["lead-email"]))
        );
        form.set_text("lead-email", "anna@example".to_string());
        assert_eq!(
            decide(&controller, &form),
            SubmitDecision::Cancel(CancelReason::Invalid(vec!["lead-email"]))
        );
    }

    #[test]
    fn revalidation_does_not_accumulate_marks() {
        let controller = on_terminal_step();
        let mut form = LeadForm::lead_capture();
        apply(&decide(&controller, &form), &mut form);
        assert_eq!(form.marked().len(), 4);

        form.set_text("lead-name", "Anna".to_string());
        form.set_text("lead-phone", "89991234567".to_string());
        form.set_text("lead-email", "anna@example.com".to_string());
        form.mark("lead-name");
        apply(&decide(&controller, &form), &mut form);
        assert_eq!(form.marked(), vec!["lead-consent"]);
    }

    #[test]
    fn non_terminal_decision_keeps_existing_marks() {
        let controller = StepController::initialize(vec![2, 0]);
        let mut form = LeadForm::lead_capture();
        form.mark("lead-email");
        apply(&decide(&controller, &form), &mut form);
        assert_eq!(form.marked(), vec!["lead-email"]);
    }
}
