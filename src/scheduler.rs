use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. The browser implementation is backed by
/// `setTimeout`; tests drive a manual clock instead.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
