//! Top navigation bar with section links, language switcher, and theme
//! toggle.

use crate::i18n::{Language, Text, translate};
use crate::settings::{Theme, use_settings};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    let links = [
        ("#about", Text::NavAbout),
        ("#skills", Text::NavSkills),
        ("#workflows", Text::NavWorkflows),
        ("#projects", Text::NavProjects),
        ("#experience", Text::NavExperience),
        ("#certifications", Text::NavCertifications),
        ("#languages", Text::NavLanguages),
        ("#contact", Text::NavContact),
    ];

    view! {
        <header class="navbar">
            <a href="/" class="logo">"yb."</a>
            <nav class="navbar-links">
                {links
                    .into_iter()
                    .map(|(href, text)| view! { <a href=href>{move || tr(text)}</a> })
                    .collect_view()}
            </nav>
            <div class="navbar-actions">
                {Language::ALL
                    .into_iter()
                    .map(|language| view! {
                        <button
                            class="lang-btn"
                            class:active=move || settings.language.get() == language
                            title=language.native_name()
                            on:click=move |_| settings.language.set(language)
                        >
                            {language.short_name()}
                        </button>
                    })
                    .collect_view()}
                <button
                    class="theme-toggle"
                    on:click=move |_| settings.theme.update(|theme| *theme = theme.toggled())
                >
                    {move || if settings.theme.get() == Theme::Dark { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}
