//! About section.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="about" class="section about-section">
            <header class="section-header">
                <h2>{move || tr(Text::AboutTitle)}</h2>
            </header>
            <p class="about-lead">{move || tr(Text::AboutDescription)}</p>
            <p class="about-body">
                "I design and operate automation platforms: CI/CD pipelines, \
                 infrastructure as code, and n8n workflows that glue the rest \
                 together. Most of what you see on this page is running in \
                 production somewhere."
            </p>
        </section>
    }
}
