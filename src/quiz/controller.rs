/// Options offered on every answer step of the quiz, in step order.
/// The terminal step has no options; its controls live in `LeadForm`.
pub type StepOptions = Vec<usize>;

/// Identifies one in-flight transition so a late timer cannot finish a
/// transition it did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Started(Ticket),
    Dropped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Stayed,
    Ignored,
}

/// Owns the current step of the quiz and the in-flight guard.
///
/// Exactly one step is current at any time and `current` only ever moves
/// forward by one, when a transition started by `select_answer` finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct StepController {
    current: usize,
    option_counts: StepOptions,
    answers: Vec<Option<usize>>,
    in_flight: Option<Ticket>,
    next_ticket: u64,
}

impl StepController {
    /// `option_counts[i]` is the number of answers step `i` offers (zero for
    /// the terminal lead step). An empty sequence is treated as one step.
    pub fn initialize(option_counts: StepOptions) -> Self {
        let option_counts = if option_counts.is_empty() {
            vec![0]
        } else {
            option_counts
        };
        let answers = vec![None; option_counts.len()];

        Self {
            current: 0,
            option_counts,
            answers,
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.option_counts.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.step_count() - 1
    }

    pub fn is_visible(&self, step: usize) -> bool {
        step == self.current
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_ticket(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// The option chosen on `step`, if any.
    pub fn answer(&self, step: usize) -> Option<usize> {
        self.answers.get(step).copied().flatten()
    }

    /// Records `option` as the single choice for `step` and starts a
    /// transition. Clicks that arrive while a transition is pending are
    /// dropped, not queued.
    pub fn select_answer(&mut self, step: usize, option: usize) -> Selection {
        if self.in_flight.is_some() {
            log::debug!("answer {} on step {} dropped: transition in flight", option, step);
            return Selection::Dropped;
        }
        if step != self.current || option >= self.option_counts[step] {
            log::debug!("answer {} on step {} dropped: not selectable", option, step);
            return Selection::Dropped;
        }

        self.answers[step] = Some(option);

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        Selection::Started(ticket)
    }

    /// Finishes the transition identified by `ticket` once the visual delay
    /// has elapsed. The in-flight flag is cleared whether or not the step
    /// moved.
    pub fn finish_transition(&mut self, ticket: Ticket) -> Advance {
        if self.in_flight != Some(ticket) {
            return Advance::Ignored;
        }
        self.in_flight = None;

        if self.current + 1 < self.step_count() {
            self.current += 1;
            log::info!("quiz advanced to step {}", self.current);
            Advance::Moved(self.current)
        } else {
            Advance::Stayed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Advance, Selection, StepController};

    fn quiz() -> StepController {
        StepController::initialize(vec![3, 4, 2, 3, 0])
    }

    fn started(selection: Selection) -> super::Ticket {
        match selection {
            Selection::Started(ticket) => ticket,
            Selection::Dropped => panic!("selection was dropped"),
        }
    }

    #[test]
    fn starts_on_first_step_with_only_it_visible() {
        let controller = quiz();
        assert_eq!(controller.current(), 0);
        assert!(controller.is_visible(0));
        assert!((1..5).all(|i| !controller.is_visible(i)));
        assert!(!controller.in_flight());
    }

    #[test]
    fn each_answer_advances_exactly_one_step() {
        let mut controller = quiz();
        for step in 0..4 {
            let ticket = started(controller.select_answer(step, 0));
            assert_eq!(controller.current(), step, "advance waits for the delay");
            assert_eq!(controller.finish_transition(ticket), Advance::Moved(step + 1));
            let visible: Vec<usize> = (0..5).filter(|&i| controller.is_visible(i)).collect();
            assert_eq!(visible, vec![step + 1]);
        }
        assert!(controller.is_terminal());
    }

    #[test]
    fn answer_while_in_flight_is_dropped() {
        let mut controller = quiz();
        let ticket = started(controller.select_answer(0, 1));
        assert_eq!(controller.select_answer(0, 2), Selection::Dropped);
        assert_eq!(controller.answer(0), Some(1));
        assert_eq!(controller.current(), 0);

        assert_eq!(controller.finish_transition(ticket), Advance::Moved(1));
        assert_eq!(controller.current(), 1);
    }

    #[test]
    fn terminal_step_never_moves_but_clears_in_flight() {
        let mut controller = StepController::initialize(vec![2]);
        let ticket = started(controller.select_answer(0, 1));
        assert_eq!(controller.finish_transition(ticket), Advance::Stayed);
        assert_eq!(controller.current(), 0);
        assert!(!controller.in_flight());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut controller = quiz();
        let first = started(controller.select_answer(0, 0));
        controller.finish_transition(first);
        assert_eq!(controller.finish_transition(first), Advance::Ignored);
        assert_eq!(controller.current(), 1);
    }

    #[test]
    fn out_of_range_option_and_hidden_step_are_dropped() {
        let mut controller = quiz();
        assert_eq!(controller.select_answer(0, 3), Selection::Dropped);
        assert_eq!(controller.select_answer(2, 0), Selection::Dropped);
        assert!(!controller.in_flight());
        assert_eq!(controller.answer(0), None);
    }

    #[test]
    fn empty_sequence_still_has_one_current_step() {
        let controller = StepController::initialize(Vec::new());
        assert_eq!(controller.step_count(), 1);
        assert!(controller.is_terminal());
        assert!(controller.is_visible(0));
    }
}
