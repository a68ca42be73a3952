//! Contact form, delegating delivery to the hosted mail service.

use leptos::prelude::*;
use portfolio::config::{ContactSettings, IconKind, SectionId};
use portfolio::contact::{ContactForm, ContactStatus, EmailJsClient, MessageDelivery};

use super::{Card, Section};

#[component]
pub fn ContactSection(settings: ContactSettings) -> impl IntoView {
    let client = EmailJsClient::new(settings);
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Only a second click while pending lands here as an error; empty
        // fields are already stopped by `required`.
        let message = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(message)) => message,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "contact submit skipped");
                return;
            }
            None => return,
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let outcome = client.deliver(&message).await;
            // Form may be gone if the page was torn down meanwhile
            form.try_update(|f| f.finish(&outcome));
        });
    };

    let pending = move || form.with(|f| f.is_pending());

    view! {
        <Section id=SectionId::Contact icon=IconKind::Mail>
            <Card>
                <form class="contact-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field-label" for="contact-name">"Name"</label>
                        <input
                            id="contact-name"
                            type="text"
                            name="from_name"
                            required=true
                            disabled=pending
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label class="field-label" for="contact-email">"Email"</label>
                        <input
                            id="contact-email"
                            type="email"
                            name="reply_to"
                            required=true
                            disabled=pending
                            prop:value=move || form.with(|f| f.reply_to.clone())
                            on:input=move |ev| form.update(|f| f.reply_to = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label class="field-label" for="contact-message">"Message"</label>
                        <textarea
                            id="contact-message"
                            name="message"
                            rows="4"
                            required=true
                            disabled=pending
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button type="submit" class="btn-primary" disabled=pending>
                        {move || if pending() { "Sending..." } else { "Send Message" }}
                    </button>
                    {move || {
                        let (status, notice) = form.with(|f| (f.status(), f.notice()));
                        notice
                            .map(|text| {
                                let class = if status == ContactStatus::Failed {
                                    "notice notice-error"
                                } else {
                                    "notice notice-ok"
                                };
                                view! { <p class=class role="alert">{text}</p> }
                            })
                    }}
                </form>
            </Card>
        </Section>
    }
}
