//! Inline SVG icons for workflow node cards.
//!
//! One stroke-based glyph per [`IconKind`]; color and sizing come from
//! the surrounding card via `currentColor` and CSS.

use amber_relay_workflow::IconKind;
use leptos::prelude::*;

/// The icon for a classified node type.
#[component]
pub fn NodeIcon(kind: IconKind) -> impl IntoView {
    view! {
        <svg
            class="node-icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=kind.label()
        >
            {icon_paths(kind)
                .iter()
                .map(|d| view! { <path d=*d/> })
                .collect_view()}
        </svg>
    }
}

fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Webhook => &[
            "M18 16a3 3 0 1 0 0 6 3 3 0 0 0 0-6",
            "M6 16a3 3 0 1 0 0 6 3 3 0 0 0 0-6",
            "M12 2a3 3 0 1 0 0 6 3 3 0 0 0 0-6",
            "M12 8v4l-4 6",
            "M12 12l4 6",
        ],
        IconKind::Branch => &[
            "M6 3a2 2 0 1 0 0 4 2 2 0 0 0 0-4",
            "M6 17a2 2 0 1 0 0 4 2 2 0 0 0 0-4",
            "M18 7a2 2 0 1 0 0 4 2 2 0 0 0 0-4",
            "M6 7v10",
            "M18 11a6 6 0 0 1-6 6h-2",
        ],
        IconKind::Code => &["M8 6l-6 6 6 6", "M16 6l6 6-6 6"],
        IconKind::Cloud => &["M6 18a4 4 0 0 1 0-8 6 6 0 0 1 11.6-1.6A4.5 4.5 0 0 1 17 18z"],
        IconKind::Mail => &["M3 5h18v14H3z", "M3 7l9 6 9-6"],
        IconKind::Chat => &["M21 4H3v12h5l4 4 0-4h9z"],
        IconKind::Bot => &[
            "M5 8h14v11H5z",
            "M12 3v5",
            "M9 13h.01",
            "M15 13h.01",
            "M9 16h6",
        ],
        IconKind::Terminal => &["M3 4h18v16H3z", "M7 9l3 3-3 3", "M12 15h5"],
        IconKind::Sliders => &[
            "M4 6h16",
            "M4 12h16",
            "M4 18h16",
            "M9 4v4",
            "M15 10v4",
            "M7 16v4",
        ],
        IconKind::Filter => &["M3 4h18l-7 8v7l-4-2v-5z"],
        IconKind::Shuffle => &[
            "M3 7h4l10 10h4",
            "M3 17h4l3-3",
            "M14 7h7",
            "M18 4l3 3-3 3",
            "M18 14l3 3-3 3",
        ],
        IconKind::Play => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
            "M10 8l6 4-6 4z",
        ],
        IconKind::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4z"],
        IconKind::Database => &[
            "M12 2a9 3 0 1 0 0 6 9 3 0 0 0 0-6",
            "M3 5v14a9 3 0 0 0 18 0V5",
            "M3 12a9 3 0 0 0 18 0",
        ],
        IconKind::Wrench => &[
            "M14.7 6.3a4.5 4.5 0 0 0-6 6L3 18l3 3 5.7-5.7a4.5 4.5 0 0 0 6-6L14 13l-3-3z",
        ],
        IconKind::File => &["M6 2h9l5 5v15H6z", "M15 2v5h5", "M9 13h6", "M9 17h6"],
        IconKind::Bolt => &["M13 2L4 14h6l-1 8 9-12h-6z"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_kind_has_path_data() {
        for kind in [
            IconKind::Webhook,
            IconKind::Branch,
            IconKind::Code,
            IconKind::Cloud,
            IconKind::Mail,
            IconKind::Chat,
            IconKind::Bot,
            IconKind::Terminal,
            IconKind::Sliders,
            IconKind::Filter,
            IconKind::Shuffle,
            IconKind::Play,
            IconKind::Send,
            IconKind::Database,
            IconKind::Wrench,
            IconKind::File,
            IconKind::Bolt,
        ] {
            assert!(!icon_paths(kind).is_empty());
        }
    }
}
