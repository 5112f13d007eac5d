//! The interactive workflow gallery section.
//!
//! Cards come from the built-in catalog. Clicking one asks the server
//! for the exported document; while the request is in flight a loading
//! overlay covers the section, and once the document arrives the
//! full-screen viewer opens. Closing the viewer drops the document and
//! returns to the gallery.

use crate::components::workflow_viewer::WorkflowViewer;
use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use amber_relay_workflow::{CATALOG, WorkflowDocument, WorkflowEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Server function to load an exported workflow document by filename.
#[server]
pub async fn load_workflow(filename: String) -> Result<WorkflowDocument, ServerFnError> {
    use crate::config::SiteConfig;
    use crate::loader::read_document;
    use axum::Extension;
    use std::sync::Arc;

    let Extension(config): Extension<Arc<SiteConfig>> = leptos_axum::extract().await?;

    let (document, warnings) =
        read_document(&config.workflows_dir, &filename).map_err(|e| {
            tracing::warn!(
                workflow = %filename,
                error = %e,
                "Failed to load workflow document"
            );
            e.into_server_error()
        })?;

    for warning in &warnings {
        tracing::warn!(
            workflow = %filename,
            warning = %warning,
            "Workflow document validation warning"
        );
    }

    tracing::debug!(
        workflow = %filename,
        nodes = document.nodes.len(),
        "Loaded workflow document"
    );

    Ok(document)
}

/// The gallery section with its cards, loading overlay, and viewer.
#[component]
pub fn WorkflowsSection() -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    let (open_document, set_open_document) = signal(Option::<WorkflowDocument>::None);
    let (loading, set_loading) = signal(false);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let open_workflow = move |filename: &'static str| {
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match load_workflow(filename.to_string()).await {
                Ok(document) => set_open_document.set(Some(document)),
                Err(e) => set_load_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <section id="workflows" class="section workflows-section">
            <header class="section-header">
                <h2>{move || tr(Text::WorkflowsTitle)}</h2>
                <p>{move || tr(Text::WorkflowsSubtitle)}</p>
            </header>

            <div class="workflow-grid">
                {CATALOG
                    .iter()
                    .map(|entry| view! { <WorkflowCard entry=entry on_open=open_workflow/> })
                    .collect_view()}
            </div>

            {move || load_error.get().map(|message| view! {
                <p class="load-error">{message}</p>
            })}

            {move || loading.get().then(|| view! {
                <div class="loading-overlay">
                    <p>{move || tr(Text::WorkflowsLoading)}</p>
                </div>
            })}

            {move || open_document.get().map(|document| view! {
                <WorkflowViewer document=document set_document=set_open_document/>
            })}
        </section>
    }
}

/// One gallery card.
#[component]
fn WorkflowCard<F>(entry: &'static WorkflowEntry, on_open: F) -> impl IntoView
where
    F: Fn(&'static str) + Copy + 'static,
{
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    view! {
        <article class="workflow-card" on:click=move |_| on_open(entry.filename)>
            <h3>{entry.name}</h3>
            <p class="workflow-card-description">{entry.description}</p>
            <ul class="workflow-card-tags">
                {entry
                    .tags
                    .iter()
                    .map(|tag| view! { <li class="tag">{*tag}</li> })
                    .collect_view()}
            </ul>
            <span class="workflow-card-cta">{move || tr(Text::WorkflowsView)}</span>
        </article>
    }
}
