use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::form_fields::{FormField, FormTextArea};
use crate::forms::contact::ContactForm;
use crate::models::ContactField;
use crate::services::Services;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let services = use_context::<Services>().unwrap_or_else(Services::browser);
    let form = use_mut_ref(ContactForm::default);
    let refresh = use_force_update();

    let on_change = {
        let refresh = refresh.clone();
        Callback::from(move |_: ()| refresh.force_update())
    };
    let driver = services.driver(form.clone(), on_change);

    let field = |field: ContactField| {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().set_field(field, value);
            refresh.force_update();
        })
    };

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        let driver = driver.clone();
        spawn_local(async move {
            let _ = driver.submit().await;
        });
    });

    let snapshot = form.borrow().clone();

    html! {
        <div class="contact-wrapper">
            <h2 class="section-title">{"Ask a "}<span class="accent">{"Question"}</span></h2>
            if snapshot.is_submitted() {
                <div class="thank-you-panel">
                    <div class="check-icon">{"✓"}</div>
                    <h3>{"Thank You!"}</h3>
                    <p>{"We'll respond to your question within 24 hours."}</p>
                </div>
            } else {
                <form class="glass-form" novalidate=true {onsubmit}>
                    <FormField
                        label="Name"
                        id="name"
                        value={snapshot.request.name.clone()}
                        placeholder="Your name"
                        oninput={field(ContactField::Name)}
                    />
                    <FormField
                        label="Email"
                        id="email"
                        input_type="email"
                        value={snapshot.request.email.clone()}
                        placeholder="your@email.com"
                        oninput={field(ContactField::Email)}
                    />
                    <FormField
                        label="Subject"
                        id="subject"
                        value={snapshot.request.subject.clone()}
                        placeholder="What's your question about?"
                        oninput={field(ContactField::Subject)}
                    />
                    <FormTextArea
                        label="Your Question"
                        id="message"
                        value={snapshot.request.message.clone()}
                        placeholder="Type your question here..."
                        oninput={field(ContactField::Message)}
                    />
                    if let Some(notice) = snapshot.notice() {
                        <p class="form-notice">{notice.to_string()}</p>
                    }
                    <button type="submit" class="primary-button wide" disabled={snapshot.is_submitting()}>
                        { if snapshot.is_submitting() { "Sending..." } else { "Send Question" } }
                    </button>
                </form>
            }
        </div>
    }
}
