use log::warn;
use web_sys::window;

/// Blocking, user-facing notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    warn!("Could not show alert: {}", message);
                }
            }
            None => warn!("No window to alert on: {}", message),
        }
    }
}
