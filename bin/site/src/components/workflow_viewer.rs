//! Full-screen interactive viewer for an n8n workflow document.
//!
//! The viewer composes three pieces of state: the immutable document,
//! the pan/zoom [`Viewport`], and the node selection. Rendering is a
//! declarative re-render over signals; node cards are absolutely
//! positioned via the viewport's world-to-screen mapping and edges are
//! SVG cubics between card anchor points.
//!
//! Pointer rules: dragging empty canvas pans, the wheel zooms, clicking
//! a node card selects it. A mousedown on a card never reaches the
//! canvas (stop-propagation), so node clicks always win over panning.
//! Clicking empty canvas leaves the selection alone; only the panel's
//! close button clears it. Closing the viewer hands `None` back to the
//! owner, which unmounts it and drops all of this state.

use crate::components::node_icon::NodeIcon;
use crate::i18n::{Text, translate};
use crate::settings::use_settings;
use amber_relay_core::{Point, Size};
use amber_relay_viewport::{BUTTON_ZOOM_STEP, Viewport, WHEEL_ZOOM_STEP};
use amber_relay_workflow::{
    GraphSummary, IconKind, WorkflowDocument, WorkflowNode, compute_bounds, resolve_edges,
};
use leptos::prelude::*;

/// Node card footprint in world units, before the viewport scale.
const NODE_WIDTH: f64 = 180.0;
const NODE_HEIGHT: f64 = 60.0;

/// Viewport size assumed until the container reports a layout rect.
const FALLBACK_VIEWPORT: Size = Size::new(1280.0, 720.0);

fn pointer_position(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// The cubic connector path between two card anchor points.
///
/// Control points sit at the horizontal midpoint at each endpoint's own
/// y coordinate, giving a symmetric S-curve for any relative placement.
fn edge_path(start: Point, end: Point) -> String {
    let mid_x = (start.x + end.x) / 2.0;
    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        start.x, start.y, mid_x, start.y, mid_x, end.y, end.x, end.y
    )
}

/// The interactive workflow canvas with header controls and the node
/// inspection panel.
#[component]
pub fn WorkflowViewer(
    document: WorkflowDocument,
    set_document: WriteSignal<Option<WorkflowDocument>>,
) -> impl IntoView {
    let settings = use_settings();
    let tr = move |text: Text| translate(settings.language.get(), text);

    let bounds = compute_bounds(&document.nodes);
    let summary = GraphSummary::of(&document);
    let title = document.name.clone();
    let is_empty = document.nodes.is_empty();
    let document = StoredValue::new(document);

    let viewport = RwSignal::new(Viewport::centered(bounds, FALLBACK_VIEWPORT));
    let selected = RwSignal::new(Option::<WorkflowNode>::None);
    let container = NodeRef::<leptos::html::Div>::new();

    let container_size = move || {
        container
            .get_untracked()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                Size::new(rect.width(), rect.height())
            })
            .filter(|size| size.width > 0.0 && size.height > 0.0)
            .unwrap_or(FALLBACK_VIEWPORT)
    };

    // Re-center once the container has its real layout rect.
    Effect::new(move |_| {
        if let Some(el) = container.get() {
            let rect = el.get_bounding_client_rect();
            if rect.width() > 0.0 {
                viewport.update(|v| v.reset(bounds, Size::new(rect.width(), rect.height())));
            }
        }
    });

    // Node cards stop mousedown propagation, so a pan can only start on
    // empty canvas.
    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        viewport.update(|v| v.begin_pan(pointer_position(&ev)));
    };
    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        if viewport.with_untracked(Viewport::is_panning) {
            viewport.update(|v| v.continue_pan(pointer_position(&ev)));
        }
    };
    let on_mouse_up = move |_: leptos::ev::MouseEvent| {
        viewport.update(Viewport::end_pan);
    };
    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        let delta = if ev.delta_y() > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        viewport.update(|v| v.zoom_by(delta));
    };

    let zoom_out = move |_| viewport.update(|v| v.zoom_by(-BUTTON_ZOOM_STEP));
    let zoom_in = move |_| viewport.update(|v| v.zoom_by(BUTTON_ZOOM_STEP));
    let fit_view = move |_| viewport.update(|v| v.reset(bounds, container_size()));
    let close_viewer = move |_| set_document.set(None);

    view! {
        <div class="workflow-viewer">
            <header class="viewer-header">
                <div class="viewer-title">
                    <h2>{title}</h2>
                    <p class="viewer-summary">
                        {move || format!(
                            "{} {}, {} {}, {} {}",
                            summary.node_count, tr(Text::ViewerNodes),
                            summary.edge_count, tr(Text::ViewerConnections),
                            summary.entry_count, tr(Text::ViewerTriggers),
                        )}
                    </p>
                </div>
                <div class="viewer-controls">
                    <button class="viewer-btn" title=move || tr(Text::ViewerZoomOut) on:click=zoom_out>"−"</button>
                    <span class="viewer-zoom-level">
                        {move || format!("{}%", (viewport.get().scale() * 100.0).round())}
                    </span>
                    <button class="viewer-btn" title=move || tr(Text::ViewerZoomIn) on:click=zoom_in>"+"</button>
                    <button class="viewer-btn" title=move || tr(Text::ViewerFit) on:click=fit_view>"⛶"</button>
                    <button class="viewer-btn viewer-close" title=move || tr(Text::ViewerClose) on:click=close_viewer>"×"</button>
                </div>
            </header>

            <div
                class="viewer-canvas"
                class:panning=move || viewport.with(Viewport::is_panning)
                node_ref=container
                on:mousedown=on_mouse_down
                on:mousemove=on_mouse_move
                on:mouseup=on_mouse_up
                on:mouseleave=on_mouse_up
                on:wheel=on_wheel
            >
                <div
                    class="viewer-grid"
                    style:background-size=move || {
                        let cell = 20.0 * viewport.get().scale();
                        format!("{cell}px {cell}px")
                    }
                    style:background-position=move || {
                        let offset = viewport.get().offset();
                        format!("{}px {}px", offset.x, offset.y)
                    }
                ></div>

                <svg class="viewer-edges">
                    {move || {
                        let vp = viewport.get();
                        let scale = vp.scale();
                        document.with_value(|doc| {
                            resolve_edges(doc)
                                .iter()
                                .map(|edge| {
                                    let from = vp.to_screen(edge.from.position.to_point());
                                    let to = vp.to_screen(edge.to.position.to_point());
                                    let start = Point::new(
                                        from.x + NODE_WIDTH * scale,
                                        from.y + NODE_HEIGHT * scale / 2.0,
                                    );
                                    let end = Point::new(to.x, to.y + NODE_HEIGHT * scale / 2.0);
                                    let path = edge_path(start, end);
                                    view! {
                                        <g>
                                            <path
                                                class="edge-path"
                                                d=path.clone()
                                                fill="none"
                                                stroke-width=format!("{}", 2.0 * scale)
                                            />
                                            <circle class="edge-pulse" r=format!("{}", 4.0 * scale)>
                                                <animateMotion dur="2s" repeatCount="indefinite" path=path/>
                                            </circle>
                                        </g>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </svg>

                {move || {
                    let vp = viewport.get();
                    let scale = vp.scale();
                    let selected_id = selected.with(|sel| sel.as_ref().map(|node| node.id.clone()));
                    document.with_value(|doc| {
                        doc.nodes
                            .iter()
                            .map(|node| {
                                let screen = vp.to_screen(node.position.to_point());
                                let is_selected = selected_id.as_deref() == Some(node.id.as_str());
                                let icon = IconKind::classify(&node.kind);
                                let label_size = (12.0 * scale).max(10.0);
                                let node_for_select = node.clone();
                                view! {
                                    <div
                                        class="node-card"
                                        class:selected=is_selected
                                        style:left=format!("{}px", screen.x)
                                        style:top=format!("{}px", screen.y)
                                        style:width=format!("{}px", NODE_WIDTH * scale)
                                        style:height=format!("{}px", NODE_HEIGHT * scale)
                                        on:mousedown=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                                        on:click=move |_| selected.set(Some(node_for_select.clone()))
                                    >
                                        <span class="node-card-icon"><NodeIcon kind=icon/></span>
                                        <span
                                            class="node-card-name"
                                            style:font-size=format!("{label_size}px")
                                        >
                                            {node.name.clone()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}

                {is_empty.then(|| view! {
                    <div class="viewer-empty-state">
                        <p>{move || tr(Text::ViewerEmpty)}</p>
                    </div>
                })}
            </div>

            {move || {
                selected.get().map(|node| {
                    let parameters = node
                        .parameters
                        .as_ref()
                        .filter(|p| !matches!(p, serde_json::Value::Object(m) if m.is_empty()))
                        .map(|p| serde_json::to_string_pretty(p).unwrap_or_default());
                    let credential_names: Vec<String> = node
                        .credentials
                        .as_ref()
                        .map(|c| c.keys().cloned().collect())
                        .unwrap_or_default();
                    view! {
                        <aside class="node-panel">
                            <header class="node-panel-header">
                                <h3>{node.name.clone()}</h3>
                                <button
                                    class="viewer-btn node-panel-close"
                                    title=move || tr(Text::ViewerClose)
                                    on:click=move |_| selected.set(None)
                                >"×"</button>
                            </header>
                            <dl class="node-panel-body">
                                <dt>{move || tr(Text::ViewerType)}</dt>
                                <dd class="mono">{node.kind.clone()}</dd>

                                <dt>{move || tr(Text::ViewerPosition)}</dt>
                                <dd class="mono">
                                    {format!("x: {}, y: {}", node.position.x, node.position.y)}
                                </dd>

                                {parameters.map(|json| view! {
                                    <dt>{move || tr(Text::ViewerParameters)}</dt>
                                    <dd><pre class="node-parameters">{json}</pre></dd>
                                })}

                                {(!credential_names.is_empty()).then(|| view! {
                                    <dt>{move || tr(Text::ViewerCredentials)}</dt>
                                    <dd>
                                        <ul class="credential-names">
                                            {credential_names
                                                .into_iter()
                                                .map(|name| view! { <li class="mono">{name}</li> })
                                                .collect_view()}
                                        </ul>
                                    </dd>
                                })}
                            </dl>
                        </aside>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_path_is_a_symmetric_s_curve() {
        let path = edge_path(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(path, "M 0 0 C 50 0, 50 50, 100 50");
    }

    #[test]
    fn edge_path_handles_backward_connections() {
        let path = edge_path(Point::new(200.0, 80.0), Point::new(-40.0, 20.0));
        assert_eq!(path, "M 200 80 C 80 80, 80 20, -40 20");
    }
}
