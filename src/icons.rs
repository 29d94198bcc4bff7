//! Inline SVG glyphs for the service cards.
//!
//! Stroke-outline icons on a 24x24 grid. Any provider that can render
//! a fixed glyph at a given size could replace this module.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Palette,
    Globe,
    Layers,
    Zap,
    Camera,
    Sparkles,
}

impl Icon {
    /// Path data for the glyph outline.
    pub fn path(self) -> &'static str {
        match self {
            Icon::Palette => {
                "M12 2a10 10 0 0 0 0 20c.9 0 1.6-.7 1.6-1.6 0-.4-.2-.8-.4-1.1-.3-.3-.4-.7-.4-1.1 \
                 0-.9.7-1.6 1.6-1.6H16a6 6 0 0 0 6-6c0-4.8-4.5-8.6-10-8.6\
                 M6.5 12a1 1 0 1 0 0-2 1 1 0 0 0 0 2\
                 M9.5 8a1 1 0 1 0 0-2 1 1 0 0 0 0 2\
                 M14.5 8a1 1 0 1 0 0-2 1 1 0 0 0 0 2\
                 M17.5 12a1 1 0 1 0 0-2 1 1 0 0 0 0 2"
            }
            Icon::Globe => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20M2 12h20\
                 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 \
                 15.3 15.3 0 0 1 4-10"
            }
            Icon::Layers => "M12 2 2 7l10 5 10-5-10-5M2 12l10 5 10-5M2 17l10 5 10-5",
            Icon::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8",
            Icon::Camera => {
                "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 \
                 0-2-2h-3l-2.5-3M12 17a4 4 0 1 0 0-8 4 4 0 0 0 0 8"
            }
            Icon::Sparkles => {
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 \
                 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3L12 3\
                 M5 3v4M19 17v4M3 5h4M17 19h4"
            }
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, size: u32) -> impl IntoView {
    let dim = size.to_string();
    view! {
        <svg
            viewBox="0 0 24 24"
            width=dim.clone()
            height=dim
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_paths_are_distinct() {
        let all = [
            Icon::Palette,
            Icon::Globe,
            Icon::Layers,
            Icon::Zap,
            Icon::Camera,
            Icon::Sparkles,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.path().is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
