use std::rc::Rc;

use log::warn;
use yew::Reducible;

use super::submit::SubmitError;
use super::{validate, Field, FieldErrors, Reservation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Everything the reservation dialog renders from. Owned by the landing view
/// through `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub open: bool,
    pub phase: Phase,
    pub values: Reservation,
    pub errors: FieldErrors,
    pub submit_error: Option<SubmitError>,
    /// Bumped each time a request is started so effects can key on it.
    pub attempt: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Open,
    Close,
    Edit(Field, String),
    Submit,
    Succeeded,
    Failed(SubmitError),
    DismissError,
    /// Fired once the success view has been shown long enough.
    FinishSuccess,
}

impl FormState {
    /// Inputs, the submit button and the close controls are disabled while busy.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Open => self.open = true,
            FormAction::Close => {
                if self.is_busy() {
                    return;
                }
                self.open = false;
                self.phase = Phase::Idle;
                self.submit_error = None;
            }
            FormAction::Edit(field, value) => {
                if self.phase != Phase::Idle {
                    return;
                }
                self.values.set(field, value);
                self.errors.remove(field);
            }
            FormAction::Submit => {
                if self.phase != Phase::Idle {
                    return;
                }
                self.submit_error = None;
                self.errors = validate(&self.values);
                if self.errors.is_empty() {
                    self.phase = Phase::Submitting;
                    self.attempt = self.attempt.wrapping_add(1);
                } else {
                    let fields: Vec<_> = self.errors.fields().map(Field::key).collect();
                    warn!("Reservation blocked by validation on: {}", fields.join(", "));
                }
            }
            FormAction::Succeeded => {
                if self.phase != Phase::Submitting {
                    return;
                }
                self.phase = Phase::Success;
                self.values = Reservation::default();
            }
            FormAction::Failed(err) => {
                if self.phase != Phase::Submitting {
                    return;
                }
                self.phase = Phase::Idle;
                self.submit_error = Some(err);
            }
            FormAction::DismissError => self.submit_error = None,
            FormAction::FinishSuccess => {
                if self.phase == Phase::Success {
                    self.open = false;
                    self.phase = Phase::Idle;
                }
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
