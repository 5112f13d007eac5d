//! Landing hero section.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="hero" class="section hero-section">
            <span class="hero-badge">{move || tr(Text::HeroAvailable)}</span>
            <h1 class="hero-title">
                <span>{move || tr(Text::HeroTitleLine1)}</span>
                <span class="gradient-text">{move || tr(Text::HeroTitleLine2)}</span>
            </h1>
            <p class="hero-tagline">{move || tr(Text::HeroTagline)}</p>
            <div class="hero-actions">
                <a class="button primary" href="#projects">{move || tr(Text::HeroViewProjects)}</a>
                <a class="button" href="#workflows">{move || tr(Text::HeroMyWorkflows)}</a>
            </div>
        </section>
    }
}
