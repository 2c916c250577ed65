use crate::email::{DispatchError, TemplateParams};
use crate::forms::{FormController, FormStatus, SubmitError};
use crate::models::{ContactField, ContactRequest};
use crate::validation::validate_contact;

const SEND_FAILED: &str = "Failed to send message. Please try again.";

/// "Ask a Question" form. Once submitted it stays on the thank-you panel for
/// the rest of the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub request: ContactRequest,
    status: FormStatus,
    notice: Option<String>,
}

impl ContactForm {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.request.set(field, value);
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }
}

impl FormController for ContactForm {
    const NAME: &'static str = "contact";

    fn status(&self) -> FormStatus {
        self.status
    }

    fn begin_submit(&mut self) -> Result<TemplateParams, SubmitError> {
        if self.status != FormStatus::Editing {
            return Err(SubmitError::NotEditing(self.status));
        }
        if let Err(e) = validate_contact(&self.request) {
            self.notice = Some(e.to_string());
            return Err(e.into());
        }

        self.notice = None;
        self.status = FormStatus::Submitting;
        let r = &self.request;
        Ok(TemplateParams::to_channel(
            &r.name,
            &r.email,
            r.subject.clone(),
            r.message.clone(),
        ))
    }

    fn complete(&mut self, result: &Result<(), DispatchError>) -> Option<String> {
        match result {
            Ok(()) => {
                self.status = FormStatus::Submitted;
                self.request = ContactRequest::default();
                None
            }
            Err(_) => {
                self.status = FormStatus::Editing;
                self.notice = Some(SEND_FAILED.to_string());
                self.notice.clone()
            }
        }
    }

    fn release(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Editing;
        }
    }
}
