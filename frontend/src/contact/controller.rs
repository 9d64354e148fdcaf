use std::rc::Rc;

use futures::future::LocalBoxFuture;
use log::info;

use super::form::{FormState, SubmitRejected};
use super::transport::{SubmitError, Transport};

/// Runs a submit attempt against an injected transport.
#[derive(Clone)]
pub struct SubmissionController {
    transport: Rc<dyn Transport>,
}

impl SubmissionController {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validates the whole form and, if it passes, hands the payload to the
    /// transport. The caller must feed the resolved future back through
    /// `FormState::finish_submit`.
    pub fn start(
        &self,
        state: &mut FormState,
    ) -> Result<LocalBoxFuture<'static, Result<(), SubmitError>>, SubmitRejected> {
        let payload = state.begin_submit()?;
        info!("Sending contact form");
        Ok(self.transport.submit(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{Field, FieldUpdate, FormData, Lifecycle};
    use futures::executor::block_on;
    use futures::future::{self, FutureExt};
    use std::cell::RefCell;

    /// Records every payload and answers with a fixed outcome.
    struct RecordingTransport {
        sent: RefCell<Vec<FormData>>,
        outcome: Result<(), SubmitError>,
    }

    impl RecordingTransport {
        fn answering(outcome: Result<(), SubmitError>) -> Rc<Self> {
            Rc::new(Self {
                sent: RefCell::new(Vec::new()),
                outcome,
            })
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl Transport for RecordingTransport {
        fn submit(&self, payload: FormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.sent.borrow_mut().push(payload);
            future::ready(self.outcome.clone()).boxed_local()
        }
    }

    /// Drives one attempt to completion the way the component's message loop does.
    fn run(controller: &SubmissionController, state: &mut FormState) -> Result<(), SubmitRejected> {
        let pending = controller.start(state)?;
        state.finish_submit(block_on(pending));
        Ok(())
    }

    fn filled_state() -> FormState {
        let mut state = FormState::new();
        state.apply(FieldUpdate::Name("Jane Doe".to_string()));
        state.apply(FieldUpdate::Phone("555.123.4567".to_string()));
        state.apply(FieldUpdate::Email("jane@example.com".to_string()));
        state.apply(FieldUpdate::Reason("I would like support with a recent loss.".to_string()));
        state.apply(FieldUpdate::PreferredTime("Evenings after 6pm".to_string()));
        state.apply(FieldUpdate::AgreeToContact(true));
        state
    }

    #[test]
    fn valid_form_is_sent_once_and_ends_submitted() {
        let transport = RecordingTransport::answering(Ok(()));
        let controller = SubmissionController::new(transport.clone());
        let mut state = filled_state();

        let pending = controller.start(&mut state).unwrap();
        assert_eq!(state.lifecycle(), &Lifecycle::Submitting);
        assert_eq!(controller.start(&mut state).err(), Some(SubmitRejected::InFlight));

        state.finish_submit(block_on(pending));
        assert_eq!(state.lifecycle(), &Lifecycle::Submitted);
        assert_eq!(transport.calls(), 1);
        assert_eq!(transport.sent.borrow()[0].phone, "(555) 123-4567");

        let again = run(&controller, &mut state);
        assert_eq!(again, Err(SubmitRejected::AlreadySubmitted));
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn invalid_form_never_reaches_the_transport() {
        let transport = RecordingTransport::answering(Ok(()));
        let controller = SubmissionController::new(transport.clone());
        let mut state = FormState::new();
        state.apply(FieldUpdate::Name("Jo".to_string()));
        state.apply(FieldUpdate::Email("bad".to_string()));
        state.apply(FieldUpdate::Reason("nineteen characters".to_string()));
        state.apply(FieldUpdate::PreferredTime("soon".to_string()));
        state.apply(FieldUpdate::AgreeToContact(false));

        let result = run(&controller, &mut state);

        assert!(matches!(result, Err(SubmitRejected::Invalid(_))));
        assert_eq!(transport.calls(), 0);
        assert_eq!(state.lifecycle(), &Lifecycle::Idle);
        let errors = state.errors();
        for field in [Field::Email, Field::Reason, Field::PreferredTime, Field::AgreeToContact] {
            assert!(errors.get(field).is_some(), "{:?}", field);
        }
        assert!(errors.get(Field::Name).is_none());
        assert!(errors
            .message(Field::Reason)
            .unwrap()
            .contains("currently 19"));
    }

    #[test]
    fn transport_failure_surfaces_as_failed_state() {
        let transport = RecordingTransport::answering(Err(SubmitError::Network("offline".to_string())));
        let controller = SubmissionController::new(transport.clone());
        let mut state = filled_state();

        run(&controller, &mut state).unwrap();

        assert_eq!(
            state.lifecycle(),
            &Lifecycle::Failed(SubmitError::Network("offline".to_string()))
        );
        assert!(state.can_submit());
        assert_eq!(state.data().name, "Jane Doe");
    }

    #[test]
    fn retry_after_failure_can_succeed() {
        let failing = RecordingTransport::answering(Err(SubmitError::TimedOut(10_000)));
        let mut state = filled_state();
        run(&SubmissionController::new(failing.clone()), &mut state).unwrap();
        assert!(matches!(state.lifecycle(), Lifecycle::Failed(_)));

        let working = RecordingTransport::answering(Ok(()));
        run(&SubmissionController::new(working.clone()), &mut state).unwrap();
        assert_eq!(state.lifecycle(), &Lifecycle::Submitted);
        assert_eq!(failing.calls(), 1);
        assert_eq!(working.calls(), 1);
    }
}
