//! Certifications section.

use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use leptos::prelude::*;

const CERTIFICATIONS: &[(&str, &str, &str)] = &[
    ("Certified Kubernetes Administrator", "CNCF", "2024"),
    ("AWS Solutions Architect Associate", "Amazon Web Services", "2023"),
    ("GitLab Certified CI/CD Associate", "GitLab", "2023"),
    ("HashiCorp Terraform Associate", "HashiCorp", "2022"),
];

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <section id="certifications" class="section certifications-section">
            <header class="section-header">
                <h2>{move || tr(Text::CertificationsTitle)}</h2>
                <p>{move || tr(Text::CertificationsSubtitle)}</p>
            </header>
            <ul class="certification-list">
                {CERTIFICATIONS
                    .iter()
                    .map(|(name, issuer, year)| view! {
                        <li class="certification">
                            <h3>{*name}</h3>
                            <p class="certification-meta">{*issuer}" · "{*year}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
