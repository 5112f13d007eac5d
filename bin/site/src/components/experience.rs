//! Experience timeline section.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

struct Role {
    period: &'static str,
    title: &'static str,
    company: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        period: "2022 - now",
        title: "Senior DevOps Engineer",
        company: "Relay Systems",
        highlights: &[
            "Own the GitLab CI/CD platform for 40+ services",
            "Cut average pipeline time from 24 to 9 minutes",
            "Introduced n8n for cross-team automation glue",
        ],
    },
    Role {
        period: "2019 - 2022",
        title: "Platform Engineer",
        company: "Nordwind Hosting",
        highlights: &[
            "Migrated bare-metal fleet to Kubernetes",
            "Built Prometheus/Grafana observability stack",
        ],
    },
    Role {
        period: "2017 - 2019",
        title: "Systems Administrator",
        company: "Atlas Data Services",
        highlights: &["Automated provisioning with Ansible and SSH tooling"],
    },
];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="experience" class="section experience-section">
            <header class="section-header">
                <h2>{move || tr(Text::ExperienceTitle)}</h2>
                <p>{move || tr(Text::ExperienceSubtitle)}</p>
            </header>
            <ol class="timeline">
                {ROLES
                    .iter()
                    .map(|role| view! {
                        <li class="timeline-entry">
                            <span class="timeline-period">{role.period}</span>
                            <h3>{role.title}" · "{role.company}</h3>
                            <ul class="timeline-highlights">
                                {role
                                    .highlights
                                    .iter()
                                    .map(|highlight| view! { <li>{*highlight}</li> })
                                    .collect_view()}
                            </ul>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
