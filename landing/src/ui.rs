//! Small presentational pieces shared across sections.

use leptos::prelude::*;

/// Numbered eyebrow above a section heading: `01 // MISSION BRIEFING`.
#[component]
pub fn SectionLabel(number: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="section-label">
            <span class="section-label-line"></span>
            <span class="section-label-text">{number} " // " {text}</span>
        </div>
    }
}
