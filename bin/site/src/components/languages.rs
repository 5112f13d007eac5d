//! Spoken languages section.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

const SPOKEN_LANGUAGES: &[(&str, &str)] = &[
    ("العربية", "Native"),
    ("Français", "Fluent"),
    ("English", "Fluent"),
    ("Español", "Conversational"),
];

#[component]
pub fn LanguagesSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="languages" class="section languages-section">
            <header class="section-header">
                <h2>{move || tr(Text::LanguagesTitle)}</h2>
                <p>{move || tr(Text::LanguagesSubtitle)}</p>
            </header>
            <ul class="language-list">
                {SPOKEN_LANGUAGES
                    .iter()
                    .map(|(name, level)| view! {
                        <li class="language">
                            <span class="language-name">{*name}</span>
                            <span class="language-level">{*level}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
