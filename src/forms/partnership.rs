use std::time::Duration;

use crate::config;
use crate::email::{DispatchError, TemplateParams};
use crate::forms::{FormController, FormStatus, SubmitError};
use crate::models::{PartnershipField, PartnershipRequest, PricingTier, VideoType};
use crate::validation::validate_partnership;

/// Partnership request modal. Video type is the driving field; the pricing
/// tier is read off it and cannot be edited directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartnershipForm {
    pub request: PartnershipRequest,
    status: FormStatus,
    open: bool,
    notice: Option<String>,
    attempt: u64,
}

impl PartnershipForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the modal. A finished submission goes back to a blank form; an
    /// in-flight one keeps running and lands on its own.
    pub fn close(&mut self) {
        self.open = false;
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Editing;
        }
    }

    /// Pricing card click: preselect the package and show the form.
    pub fn choose_package(&mut self, tier: PricingTier) {
        self.select_video_type(Some(tier.video_type()));
        self.open();
    }

    pub fn select_video_type(&mut self, video_type: Option<VideoType>) {
        self.request.video_type = video_type;
    }

    pub fn set_field(&mut self, field: PartnershipField, value: String) {
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

    fn message_body(request: &PartnershipRequest) -> String {
        format!(
            "Company Name: {}\nProduct URL: {}\nPricing Set: {}\nVideo Type: {}\n\nMessage:\n{}",
            request.company_name,
            request.product_url,
            request.pricing_label(),
            request.video_label(),
            request.message,
        )
    }
}

impl FormController for PartnershipForm {
    const NAME: &'static str = "partnership";

    fn status(&self) -> FormStatus {
        self.status
    }

    fn begin_submit(&mut self) -> Result<TemplateParams, SubmitError> {
        if self.status != FormStatus::Editing {
            return Err(SubmitError::NotEditing(self.status));
        }
        if let Err(e) = validate_partnership(&self.request) {
            self.notice = Some(e.to_string());
            return Err(e.into());
        }

        self.notice = None;
        self.status = FormStatus::Submitting;
        self.attempt += 1;
        let r = &self.request;
        Ok(TemplateParams::to_channel(
            &r.name,
            &r.email,
            format!("Partnership Request from {}", r.company_name),
            Self::message_body(r),
        ))
    }

    fn complete(&mut self, result: &Result<(), DispatchError>) -> Option<String> {
        match result {
            Ok(()) => {
                self.status = FormStatus::Submitted;
                self.request = PartnershipRequest::default();
                None
            }
            Err(e) => {
                self.status = FormStatus::Editing;
                self.notice = Some(format!("Failed to send partnership request: {}", e.message()));
                self.notice.clone()
            }
        }
    }

    fn release(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Editing;
        }
    }

    fn auto_close_after(&self) -> Option<Duration> {
        Some(Duration::from_millis(config::PARTNERSHIP_AUTO_CLOSE_MS))
    }

    fn attempt(&self) -> u64 {
        self.attempt
    }

    // Only the confirmation the timer was scheduled for gets closed.
    fn auto_close(&mut self, attempt: u64) {
        if self.status == FormStatus::Submitted && attempt == self.attempt {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use yew::Callback;

    use super::*;
    use crate::forms::testing::{ManualScheduler, MockDispatcher, RecordingNotifier};
    use crate::forms::FormDriver;
    use crate::validation::ValidationError;

    struct Harness {
        form: Rc<RefCell<PartnershipForm>>,
        dispatcher: Rc<MockDispatcher>,
        scheduler: Rc<ManualScheduler>,
        notifier: Rc<RecordingNotifier>,
        driver: FormDriver<PartnershipForm>,
    }

    fn harness(dispatcher: MockDispatcher) -> Harness {
        let form = Rc::new(RefCell::new(PartnershipForm::default()));
        let dispatcher = Rc::new(dispatcher);
        let scheduler = Rc::new(ManualScheduler::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let driver = FormDriver::new(
            form.clone(),
            dispatcher.clone(),
            scheduler.clone(),
            notifier.clone(),
            Callback::from(|_: ()| ()),
        );
        Harness { form, dispatcher, scheduler, notifier, driver }
    }

    fn fill(form: &Rc<RefCell<PartnershipForm>>) {
        let mut form = form.borrow_mut();
        form.open();
        form.set_field(PartnershipField::Name, "Grace".into());
        form.set_field(PartnershipField::Email, "grace@navy.mil".into());
        form.set_field(PartnershipField::CompanyName, "Cobol Co".into());
        form.set_field(PartnershipField::ProductUrl, "https://example.com/product".into());
        form.select_video_type(Some(VideoType::Short));
        form.set_field(PartnershipField::Message, "Sponsor our launch".into());
    }

    #[test]
    fn video_type_selection_sets_pricing_idempotently() {
        let mut form = PartnershipForm::default();
        form.select_video_type(Some(VideoType::Short));
        assert_eq!(form.request.pricing_label(), "$50 - Short Video");

        form.set_field(PartnershipField::Name, "Grace".into());
        let before = form.clone();
        form.select_video_type(Some(VideoType::Short));
        assert_eq!(form, before);

        form.select_video_type(Some(VideoType::Dedicated));
        assert_eq!(form.request.pricing_label(), "$150 - Dedicated Video");
        assert_eq!(form.request.name, "Grace");
    }

    #[test]
    fn pricing_card_opens_form_with_matching_video_type() {
        let mut form = PartnershipForm::default();
        form.choose_package(PricingTier::DedicatedVideo);
        assert!(form.is_open());
        assert_eq!(form.request.video_type, Some(VideoType::Dedicated));
    }

    #[test]
    fn message_embeds_package_details() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        block_on(h.driver.submit()).unwrap();

        let sent = &h.dispatcher.sent.borrow()[0];
        assert_eq!(sent.subject, "Partnership Request from Cobol Co");
        assert_eq!(sent.reply_to, "grace@navy.mil");
        assert_eq!(sent.to_email, config::RECIPIENT_EMAIL);
        assert!(sent.message.contains("Company Name: Cobol Co"));
        assert!(sent.message.contains("Product URL: https://example.com/product"));
        assert!(sent.message.contains("Pricing Set: $50 - Short Video"));
        assert!(sent.message.contains("Video Type: Short Video"));
        assert!(sent.message.ends_with("Message:\nSponsor our launch"));
    }

    #[test]
    fn empty_product_url_is_blocked_before_dispatch() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        h.form.borrow_mut().set_field(PartnershipField::ProductUrl, String::new());

        let result = block_on(h.driver.submit());

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(h.dispatcher.calls(), 0);
        let form = h.form.borrow();
        assert!(!form.is_submitted());
        assert!(!form.is_submitting());
        assert_eq!(form.notice(), Some("Please fill in all required fields before submitting."));
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn malformed_url_and_email_have_their_own_notices() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        h.form.borrow_mut().set_field(PartnershipField::ProductUrl, "not a url".into());
        let _ = block_on(h.driver.submit());

        h.form.borrow_mut().set_field(PartnershipField::Email, "grace@navy".into());
        let _ = block_on(h.driver.submit());

        assert_eq!(
            h.notifier.messages.borrow().as_slice(),
            [
                "Please enter a valid product URL.".to_string(),
                "Please enter a valid email address.".to_string(),
            ]
        );
        assert_eq!(h.dispatcher.calls(), 0);
    }

    #[test]
    fn confirmation_auto_closes_after_three_seconds() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);

        block_on(h.driver.submit()).unwrap();
        {
            let form = h.form.borrow();
            assert!(form.is_submitted());
            assert!(form.is_open());
            assert_eq!(form.request, PartnershipRequest::default());
        }

        h.scheduler.advance(Duration::from_millis(2_999));
        assert!(h.form.borrow().is_open());

        h.scheduler.advance(Duration::from_millis(1));
        let form = h.form.borrow();
        assert!(!form.is_open());
        assert!(!form.is_submitted());
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn auto_close_leaves_a_reopened_form_alone() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        block_on(h.driver.submit()).unwrap();

        h.form.borrow_mut().close();
        h.form.borrow_mut().open();
        h.scheduler.advance(Duration::from_millis(3_000));

        assert!(h.form.borrow().is_open());
    }

    #[test]
    fn earlier_timer_does_not_cut_a_later_confirmation_short() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        block_on(h.driver.submit()).unwrap();

        h.form.borrow_mut().close();
        h.scheduler.advance(Duration::from_millis(1_000));
        fill(&h.form);
        block_on(h.driver.submit()).unwrap();

        // First timer fires here, 2000 ms into the second confirmation.
        h.scheduler.advance(Duration::from_millis(2_000));
        {
            let form = h.form.borrow();
            assert!(form.is_open());
            assert!(form.is_submitted());
        }
        assert_eq!(h.scheduler.pending(), 1);

        h.scheduler.advance(Duration::from_millis(1_000));
        assert!(!h.form.borrow().is_open());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn padded_email_is_rejected() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        h.form.borrow_mut().set_field(PartnershipField::Email, " grace@navy.mil ".into());

        let result = block_on(h.driver.submit());

        assert_eq!(result, Err(SubmitError::Invalid(ValidationError::InvalidEmail)));
        assert_eq!(h.dispatcher.calls(), 0);
    }

    #[test]
    fn double_submit_while_in_flight_dispatches_once() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        let gate = h.dispatcher.hold_next();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let driver = h.driver.clone();
            spawner
                .spawn_local(async move {
                    let _ = driver.submit().await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(h.dispatcher.calls(), 1);

        gate.send(()).unwrap();
        pool.run();
        assert_eq!(h.dispatcher.calls(), 1);
        assert!(h.form.borrow().is_submitted());
    }

    #[test]
    fn failure_surfaces_detail_and_releases_guard() {
        let h = harness(MockDispatcher::failing(DispatchError::Status {
            status: 412,
            text: "The template ID is invalid".into(),
        }));
        fill(&h.form);

        let result = block_on(h.driver.submit());

        assert!(matches!(result, Err(SubmitError::Dispatch(_))));
        {
            let form = h.form.borrow();
            assert_eq!(form.status(), FormStatus::Editing);
            assert_eq!(form.request.company_name, "Cobol Co");
            assert_eq!(
                form.notice(),
                Some("Failed to send partnership request: The template ID is invalid")
            );
        }
        assert_eq!(h.scheduler.pending(), 0);

        h.dispatcher.set_outcome(Ok(()));
        block_on(h.driver.submit()).unwrap();
        assert_eq!(h.dispatcher.calls(), 2);
    }

    #[test]
    fn dropped_submission_releases_guard() {
        let h = harness(MockDispatcher::succeeding());
        fill(&h.form);
        let _gate = h.dispatcher.hold_next();

        block_on(async {
            let mut pending = Box::pin(h.driver.submit());
            assert!(futures::poll!(&mut pending).is_pending());
            assert!(h.form.borrow().is_submitting());
            drop(pending);
        });

        assert_eq!(h.form.borrow().status(), FormStatus::Editing);
        assert_eq!(h.form.borrow().request.name, "Grace");
    }
}
