//! Projects section.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

struct Project {
    name: &'static str,
    description: &'static str,
    stack: &'static [&'static str],
    link: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Homelab GitOps",
        description: "K3s cluster managed end to end with ArgoCD: sealed \
                      secrets, renovate-driven upgrades, and zero manual \
                      kubectl.",
        stack: &["K3s", "ArgoCD", "Helm"],
        link: Some("https://github.com/yberrada/homelab-gitops"),
    },
    Project {
        name: "Pipeline Sentinel",
        description: "GitLab webhook service that gates deployments on \
                      SonarQube quality metrics and posts verdicts to Slack.",
        stack: &["Rust", "GitLab", "SonarQube"],
        link: Some("https://github.com/yberrada/pipeline-sentinel"),
    },
    Project {
        name: "amber-relay",
        description: "This site: a Leptos single-page portfolio with an \
                      interactive viewer for exported n8n workflows.",
        stack: &["Rust", "Leptos", "Axum"],
        link: None,
    },
];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="projects" class="section projects-section">
            <header class="section-header">
                <h2>{move || tr(Text::ProjectsTitle)}</h2>
                <p>{move || tr(Text::ProjectsSubtitle)}</p>
            </header>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|project| view! {
                        <article class="project-card">
                            <h3>
                                {match project.link {
                                    Some(link) => view! {
                                        <a href=link rel="external">{project.name}</a>
                                    }.into_any(),
                                    None => view! { <span>{project.name}</span> }.into_any(),
                                }}
                            </h3>
                            <p>{project.description}</p>
                            <ul class="workflow-card-tags">
                                {project
                                    .stack
                                    .iter()
                                    .map(|item| view! { <li class="tag">{*item}</li> })
                                    .collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
