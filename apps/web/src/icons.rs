//! Inline SVG icons (Lucide outlines) for cards and category toggles.

use dioxus::prelude::*;
use muso_core::Icon;

#[component]
pub fn IconSvg(icon: Icon, size: u32) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {match icon {
                Icon::Search => rsx! {
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                },
                Icon::Users => rsx! {
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "4" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                },
                Icon::Disc => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                    path { d: "M6 12c0-1.7.7-3.2 1.8-4.2" }
                    circle { cx: "12", cy: "12", r: "2" }
                    path { d: "M18 12c0 1.7-.7 3.2-1.8 4.2" }
                },
                Icon::Music => rsx! {
                    path { d: "M9 18V5l12-2v13" }
                    circle { cx: "6", cy: "18", r: "3" }
                    circle { cx: "18", cy: "16", r: "3" }
                },
                Icon::Zap => rsx! {
                    polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
                },
                Icon::Tag => rsx! {
                    path { d: "M12 2H2v10l9.29 9.29a2.41 2.41 0 0 0 3.42 0l6.58-6.58a2.41 2.41 0 0 0 0-3.42L12 2Z" }
                    path { d: "M7 7h.01" }
                },
            }}
        }
    }
}
