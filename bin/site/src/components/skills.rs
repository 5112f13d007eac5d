//! Skills section: grouped technology badges.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    (
        "Cloud & Infrastructure",
        &["AWS", "Docker", "Kubernetes", "K3s", "Terraform", "Cloudflare"],
    ),
    (
        "CI/CD & Automation",
        &["GitLab CI", "Jenkins", "ArgoCD", "n8n", "Ansible"],
    ),
    (
        "Observability",
        &["Prometheus", "Grafana", "Loki", "SonarQube"],
    ),
    (
        "Languages & Scripting",
        &["Rust", "Python", "Bash", "TypeScript", "SQL"],
    ),
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="skills" class="section skills-section">
            <header class="section-header">
                <h2>{move || tr(Text::SkillsTitle)}</h2>
                <p>{move || tr(Text::SkillsSubtitle)}</p>
            </header>
            <div class="skill-groups">
                {SKILL_GROUPS
                    .iter()
                    .map(|(group, items)| view! {
                        <div class="skill-group">
                            <h3>{*group}</h3>
                            <ul class="skill-badges">
                                {items
                                    .iter()
                                    .map(|item| view! { <li class="tag">{*item}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
