//! Submission workflow shared by the contact and partnership forms.
//!
//! A form controller is plain state. [`FormDriver`] owns the side effects:
//! it asks the controller for a message, dispatches it, hands the outcome
//! back, and schedules the delayed close when the controller wants one.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{info, warn};
use thiserror::Error;
use yew::Callback;

use crate::email::{DispatchError, EmailDispatcher, TemplateParams};
use crate::notify::Notifier;
use crate::scheduler::Scheduler;
use crate::validation::ValidationError;

pub mod contact;
pub mod partnership;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("form is not accepting submissions while {0:?}")]
    NotEditing(FormStatus),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub trait FormController {
    /// Short name used in log lines.
    const NAME: &'static str;

    fn status(&self) -> FormStatus;

    /// Validates and moves to `Submitting`. Only legal from `Editing`.
    fn begin_submit(&mut self) -> Result<TemplateParams, SubmitError>;

    /// Applies the dispatch outcome. Returns the notice to show on failure.
    fn complete(&mut self, result: &Result<(), DispatchError>) -> Option<String>;

    /// Drops the in-flight guard if nothing else has. Called on every exit path.
    fn release(&mut self);

    fn auto_close_after(&self) -> Option<Duration> {
        None
    }

    /// Counter identifying the latest submission attempt. A delayed close
    /// carries the value it was scheduled with.
    fn attempt(&self) -> u64 {
        0
    }

    fn auto_close(&mut self, _attempt: u64) {}
}

/// Puts a form back into `Editing` if the submission ends without an outcome,
/// e.g. the future was dropped while the dispatch was pending.
struct ReleaseGuard<F: FormController> {
    form: Rc<RefCell<F>>,
}

impl<F: FormController> Drop for ReleaseGuard<F> {
    fn drop(&mut self) {
        match self.form.try_borrow_mut() {
            Ok(mut form) => form.release(),
            Err(_) => warn!("{}: form busy, in-flight guard not released", F::NAME),
        }
    }
}

pub struct FormDriver<F: FormController> {
    form: Rc<RefCell<F>>,
    dispatcher: Rc<dyn EmailDispatcher>,
    scheduler: Rc<dyn Scheduler>,
    notifier: Rc<dyn Notifier>,
    on_change: Callback<()>,
}

impl<F: FormController> Clone for FormDriver<F> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            dispatcher: self.dispatcher.clone(),
            scheduler: self.scheduler.clone(),
            notifier: self.notifier.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<F: FormController + 'static> FormDriver<F> {
    pub fn new(
        form: Rc<RefCell<F>>,
        dispatcher: Rc<dyn EmailDispatcher>,
        scheduler: Rc<dyn Scheduler>,
        notifier: Rc<dyn Notifier>,
        on_change: Callback<()>,
    ) -> Self {
        Self { form, dispatcher, scheduler, notifier, on_change }
    }

    /// Runs one submission attempt end to end. Borrows of the form are never
    /// held across the dispatch await.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let begun = self.form.borrow_mut().begin_submit();
        let params = match begun {
            Ok(params) => params,
            Err(SubmitError::NotEditing(status)) => {
                info!("{}: ignoring submit while {:?}", F::NAME, status);
                return Err(SubmitError::NotEditing(status));
            }
            Err(e) => {
                match &e {
                    SubmitError::Invalid(ValidationError::MissingFields(fields)) => {
                        warn!("{}: submission blocked, missing {}", F::NAME, fields.join(", "));
                    }
                    _ => warn!("{}: submission blocked: {}", F::NAME, e),
                }
                self.notifier.notify(&e.to_string());
                self.on_change.emit(());
                return Err(e);
            }
        };

        let _release = ReleaseGuard { form: self.form.clone() };
        self.on_change.emit(());

        info!("{}: dispatching", F::NAME);
        let result = self.dispatcher.send(params).await;
        let notice = self.form.borrow_mut().complete(&result);
        if let Some(notice) = notice {
            warn!("{}: {}", F::NAME, notice);
            self.notifier.notify(&notice);
        }

        if result.is_ok() {
            info!("{}: sent", F::NAME);
            self.schedule_auto_close();
        }
        self.on_change.emit(());
        result.map_err(SubmitError::from)
    }

    fn schedule_auto_close(&self) {
        let (delay, attempt) = {
            let form = self.form.borrow();
            (form.auto_close_after(), form.attempt())
        };
        if let Some(delay) = delay {
            let form = self.form.clone();
            let on_change = self.on_change.clone();
            self.scheduler.schedule_once(
                delay,
                Box::new(move || {
                    info!("{}: auto-closing", F::NAME);
                    form.borrow_mut().auto_close(attempt);
                    on_change.emit(());
                }),
            );
        }
    }
}

#[cfg(test)]
pub mod testing {
    //! Doubles for the dispatcher, scheduler and notifier.

    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use futures::channel::oneshot;
    use futures::future::{FutureExt, LocalBoxFuture};

    use crate::email::{DispatchError, EmailDispatcher, TemplateParams};
    use crate::notify::Notifier;
    use crate::scheduler::Scheduler;

    pub struct MockDispatcher {
        pub sent: RefCell<Vec<TemplateParams>>,
        outcome: RefCell<Result<(), DispatchError>>,
        gates: RefCell<Vec<oneshot::Receiver<()>>>,
    }

    impl MockDispatcher {
        pub fn succeeding() -> Self {
            Self::with_outcome(Ok(()))
        }

        pub fn failing(err: DispatchError) -> Self {
            Self::with_outcome(Err(err))
        }

        fn with_outcome(outcome: Result<(), DispatchError>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                outcome: RefCell::new(outcome),
                gates: RefCell::new(Vec::new()),
            }
        }

        pub fn set_outcome(&self, outcome: Result<(), DispatchError>) {
            *self.outcome.borrow_mut() = outcome;
        }

        /// The next `send` stays pending until the returned sender fires or drops.
        pub fn hold_next(&self) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().push(rx);
            tx
        }

        pub fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl EmailDispatcher for MockDispatcher {
        fn send(&self, params: TemplateParams) -> LocalBoxFuture<'static, Result<(), DispatchError>> {
            self.sent.borrow_mut().push(params);
            let outcome = self.outcome.borrow().clone();
            let gate = {
                let mut gates = self.gates.borrow_mut();
                if gates.is_empty() { None } else { Some(gates.remove(0)) }
            };
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                outcome
            }
            .boxed_local()
        }
    }

    /// Clock that only moves when told to.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<Duration>,
        tasks: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.tasks.borrow().len()
        }

        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
            let now = self.now.get();
            let due: Vec<Box<dyn FnOnce()>> = {
                let mut tasks = self.tasks.borrow_mut();
                let (due, waiting): (Vec<_>, Vec<_>) =
                    tasks.drain(..).partition(|(at, _)| *at <= now);
                *tasks = waiting;
                due.into_iter().map(|(_, task)| task).collect()
            };
            for task in due {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            let at = self.now.get() + delay;
            self.tasks.borrow_mut().push((at, task));
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use yew::Callback;

    use super::testing::{ManualScheduler, MockDispatcher, RecordingNotifier};
    use super::*;
    use crate::forms::partnership::PartnershipForm;
    use crate::models::{PartnershipField, VideoType};

    fn submitting_form() -> Rc<RefCell<PartnershipForm>> {
        let form = Rc::new(RefCell::new(PartnershipForm::default()));
        {
            let mut form = form.borrow_mut();
            form.open();
            form.set_field(PartnershipField::Name, "Grace".into());
            form.set_field(PartnershipField::Email, "grace@navy.mil".into());
            form.set_field(PartnershipField::CompanyName, "Cobol Co".into());
            form.set_field(PartnershipField::ProductUrl, "https://example.com".into());
            form.select_video_type(Some(VideoType::Short));
            form.set_field(PartnershipField::Message, "Hello".into());
            form.begin_submit().unwrap();
        }
        form
    }

    #[test]
    fn release_guard_skips_a_borrowed_form_without_panicking() {
        let form = submitting_form();

        let held = form.borrow();
        drop(ReleaseGuard { form: form.clone() });
        assert_eq!(held.status(), FormStatus::Submitting);
        drop(held);

        drop(ReleaseGuard { form: form.clone() });
        assert_eq!(form.borrow().status(), FormStatus::Editing);
    }

    #[test]
    fn blocked_submit_names_the_missing_fields() {
        let form = Rc::new(RefCell::new(PartnershipForm::default()));
        form.borrow_mut().set_field(PartnershipField::Name, "Grace".into());
        let dispatcher = Rc::new(MockDispatcher::succeeding());
        let driver = FormDriver::new(
            form,
            dispatcher.clone(),
            Rc::new(ManualScheduler::default()),
            Rc::new(RecordingNotifier::default()),
            Callback::from(|_: ()| ()),
        );

        let result = block_on(driver.submit());

        match result {
            Err(SubmitError::Invalid(ValidationError::MissingFields(fields))) => {
                assert!(!fields.contains(&"name"));
                assert!(fields.contains(&"companyName"));
                assert!(fields.contains(&"videoType"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(dispatcher.calls(), 0);
    }
}
