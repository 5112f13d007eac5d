//! Contact form section.
//!
//! Submissions go through a server function that validates the fields
//! and records the message in the server log.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::form::ActionForm;
use leptos::prelude::*;

/// Server function to accept a contact form submission.
#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::config::SiteConfig;
    use crate::error::ContactError;
    use axum::Extension;
    use std::sync::Arc;

    let Extension(config): Extension<Arc<SiteConfig>> = leptos_axum::extract().await?;

    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() {
        return Err(ContactError::MissingField { field: "name" }.into_server_error());
    }
    if email.is_empty() {
        return Err(ContactError::MissingField { field: "email" }.into_server_error());
    }
    if !email.contains('@') {
        return Err(ContactError::InvalidEmail.into_server_error());
    }
    if message.is_empty() {
        return Err(ContactError::MissingField { field: "message" }.into_server_error());
    }
    if message.len() > config.contact.max_message_bytes {
        tracing::debug!(
            bytes = message.len(),
            limit = config.contact.max_message_bytes,
            "Rejected oversized contact message"
        );
        return Err(ContactError::MessageTooLong {
            limit: config.contact.max_message_bytes,
        }
        .into_server_error());
    }

    tracing::info!(
        from = %email,
        name = %name,
        bytes = message.len(),
        "Contact message received"
    );

    Ok(())
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    let submit = ServerAction::<SendContactMessage>::new();

    view! {
        <section id="contact" class="section contact-section">
            <header class="section-header">
                <h2>{move || tr(Text::ContactTitle)}</h2>
                <p>{move || tr(Text::ContactSubtitle)}</p>
            </header>
            <ActionForm action=submit attr:class="contact-form">
                <label>
                    {move || tr(Text::ContactName)}
                    <input type="text" name="name"/>
                </label>
                <label>
                    {move || tr(Text::ContactEmail)}
                    <input type="email" name="email"/>
                </label>
                <label>
                    {move || tr(Text::ContactMessage)}
                    <textarea name="message" rows="6"></textarea>
                </label>
                <button type="submit" class="button primary">
                    {move || tr(Text::ContactSend)}
                </button>
            </ActionForm>
            {move || submit.value().get().map(|result| match result {
                Ok(()) => view! {
                    <p class="form-status ok">{move || tr(Text::ContactSent)}</p>
                }.into_any(),
                Err(e) => view! {
                    <p class="form-status error">{e.to_string()}</p>
                }.into_any(),
            })}
        </section>
    }
}
