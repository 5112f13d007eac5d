//! The single portfolio page: every section composed in scroll order.

use crate::components::about::AboutSection;
use crate::components::certifications::CertificationsSection;
use crate::components::contact::ContactSection;
use crate::components::experience::ExperienceSection;
use crate::components::hero::HeroSection;
use crate::components::languages::LanguagesSection;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::components::workflows::WorkflowsSection;
use leptos::prelude::*;

/// The home page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HeroSection/>
        <AboutSection/>
        <SkillsSection/>
        <WorkflowsSection/>
        <ProjectsSection/>
        <ExperienceSection/>
        <CertificationsSection/>
        <LanguagesSection/>
        <ContactSection/>
    }
}
