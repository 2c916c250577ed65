use yew::prelude::*;

use crate::components::form_fields::{FormField, FormSelect, FormTextArea, SelectOption};
use crate::config;
use crate::forms::partnership::PartnershipForm;
use crate::models::{PartnershipField, VideoType};

#[derive(Properties, PartialEq)]
pub struct PartnershipModalProps {
    /// Snapshot of the form owned by the page.
    pub form: PartnershipForm,
    pub on_field: Callback<(PartnershipField, String)>,
    pub on_video_type: Callback<Option<VideoType>>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

fn video_options() -> Vec<SelectOption> {
    VideoType::ALL
        .iter()
        .map(|v| SelectOption { value: v.label().into(), label: v.label().into() })
        .collect()
}

fn pricing_options() -> Vec<SelectOption> {
    VideoType::ALL
        .iter()
        .rev()
        .map(|v| {
            let tier = v.pricing_tier().label();
            SelectOption { value: tier.into(), label: tier.into() }
        })
        .collect()
}

#[function_component(PartnershipModal)]
pub fn partnership_modal(props: &PartnershipModalProps) -> Html {
    let form = &props.form;
    if !form.is_open() {
        return html! {};
    }

    let field = |field: PartnershipField| {
        let on_field = props.on_field.clone();
        Callback::from(move |value: String| on_field.emit((field, value)))
    };

    let on_video = {
        let on_video_type = props.on_video_type.clone();
        Callback::from(move |label: String| on_video_type.emit(VideoType::from_label(&label)))
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal-shell">
                <button class="modal-close" onclick={close} aria-label="Close">{"✕"}</button>
                if form.is_submitted() {
                    <div class="thank-you-panel">
                        <div class="check-icon">{"✓"}</div>
                        <h3>{"Thank You!"}</h3>
                        <p>{"We'll get back to you within 24 hours."}</p>
                        <p class="small">{format!("Your request has been sent to: {}", config::RECIPIENT_EMAIL)}</p>
                    </div>
                } else {
                    <form class="glass-form modal-form" novalidate=true {onsubmit}>
                        <div class="modal-heading">
                            <h2>{"Start Your "}<span class="accent">{"Partnership"}</span></h2>
                            <p class="small">
                                {"Send your request to: "}
                                <span class="accent">{config::RECIPIENT_EMAIL}</span>
                            </p>
                            <p class="small">{"All fields are required"}</p>
                        </div>
                        <FormField
                            label="Name"
                            id="partnership-name"
                            value={form.request.name.clone()}
                            placeholder="Your name"
                            marked_required=true
                            oninput={field(PartnershipField::Name)}
                        />
                        <FormField
                            label="Email"
                            id="partnership-email"
                            input_type="email"
                            value={form.request.email.clone()}
                            placeholder="your@email.com"
                            pattern={AttrValue::Static(r"[^\s@]+@[^\s@]+\.[^\s@]+")}
                            title={AttrValue::Static("Please enter a valid email address (e.g., name@example.com)")}
                            marked_required=true
                            oninput={field(PartnershipField::Email)}
                        />
                        <FormField
                            label="Company Name"
                            id="partnership-companyName"
                            value={form.request.company_name.clone()}
                            placeholder="Your company name"
                            marked_required=true
                            oninput={field(PartnershipField::CompanyName)}
                        />
                        <FormField
                            label="Product URL"
                            id="partnership-productUrl"
                            input_type="url"
                            value={form.request.product_url.clone()}
                            placeholder="https://your-product.com"
                            marked_required=true
                            oninput={field(PartnershipField::ProductUrl)}
                        />
                        <FormSelect
                            label="Video Type"
                            id="partnership-videoType"
                            value={form.request.video_label()}
                            placeholder="Select video type"
                            options={video_options()}
                            marked_required=true
                            onchange={on_video}
                        />
                        // Follows the video type, never edited directly.
                        <FormSelect
                            label="Pricing Set"
                            id="partnership-pricingSet"
                            value={form.request.pricing_label()}
                            placeholder="Select a video type first"
                            options={pricing_options()}
                            marked_required=true
                        />
                        <FormTextArea
                            label="Message"
                            id="partnership-message"
                            value={form.request.message.clone()}
                            placeholder="Tell us about your partnership goals..."
                            marked_required=true
                            oninput={field(PartnershipField::Message)}
                        />
                        if let Some(notice) = form.notice() {
                            <p class="form-notice">{notice.to_string()}</p>
                        }
                        <button type="submit" class="primary-button wide" disabled={form.is_submitting()}>
                            { if form.is_submitting() { "Sending..." } else { "Submit Request" } }
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
