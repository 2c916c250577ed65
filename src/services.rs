use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use crate::email::{EmailDispatcher, EmailJsClient};
use crate::forms::{FormController, FormDriver};
use crate::notify::{AlertNotifier, Notifier};
use crate::scheduler::{BrowserScheduler, Scheduler};

/// Side-effecting collaborators handed to the forms through a Yew context,
/// so they can be swapped without touching the components.
#[derive(Clone)]
pub struct Services {
    pub dispatcher: Rc<dyn EmailDispatcher>,
    pub scheduler: Rc<dyn Scheduler>,
    pub notifier: Rc<dyn Notifier>,
}

impl Services {
    pub fn browser() -> Self {
        Self {
            dispatcher: Rc::new(EmailJsClient::from_config()),
            scheduler: Rc::new(BrowserScheduler),
            notifier: Rc::new(AlertNotifier),
        }
    }

    pub fn driver<F: FormController + 'static>(
        &self,
        form: Rc<RefCell<F>>,
        on_change: Callback<()>,
    ) -> FormDriver<F> {
        FormDriver::new(
            form,
            self.dispatcher.clone(),
            self.scheduler.clone(),
            self.notifier.clone(),
            on_change,
        )
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatcher, &other.dispatcher)
            && Rc::ptr_eq(&self.scheduler, &other.scheduler)
            && Rc::ptr_eq(&self.notifier, &other.notifier)
    }
}
