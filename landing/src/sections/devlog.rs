use leptos::prelude::*;

use crate::catalog;
use crate::ui::SectionLabel;

#[component]
pub fn DevLog() -> impl IntoView {
    view! {
        <section id="devlog" class="devlog">
            <div class="container">
                <SectionLabel number="04" text="DEVELOPMENT LOG" />
                <div class="devlog-grid">
                    <LogPanel
                        title="Challenges"
                        accent="log-red"
                        glyph="⚠"
                        entries=catalog::CHALLENGES
                    />
                    <LogPanel
                        title="Opportunities"
                        accent="log-green"
                        glyph="◎"
                        entries=catalog::OPPORTUNITIES
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn LogPanel(
    title: &'static str,
    accent: &'static str,
    glyph: &'static str,
    entries: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class=format!("log-panel {accent}")>
            <h3 class="log-title">
                <span class="log-glyph">{glyph}</span>
                {title}
            </h3>
            <ul class="log-list">
                {catalog::numbered(entries)
                    .into_iter()
                    .map(|(label, text)| {
                        view! {
                            <li class="log-item">
                                <span class="log-index">{label}</span>
                                <p class="log-text">{text}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
