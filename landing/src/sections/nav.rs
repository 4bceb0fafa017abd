use leptos::prelude::*;

use crate::scroll;
use crate::state::NavState;

/// Links shown in both the desktop row and the mobile overlay.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "BRIEFING"),
    ("#features", "SYSTEMS"),
    ("#devlog", "LOGS"),
    ("#team", "SQUAD"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let state = RwSignal::new(NavState::default());
    scroll::observe(state);

    view! {
        <nav class=move || state.get().navbar_mode().nav_class()>
            <div class="nav-inner">
                <div class="nav-brand">
                    <span class="nav-logo">"♻"</span>
                    <span class="nav-title">"RECYCOPTER"</span>
                </div>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class="nav-link">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="nav-menu-btn"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || state.get().menu_open.to_string()
                    on:click=move |_| state.update(|s| *s = s.menu_toggled())
                >
                    {move || if state.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile overlay. Every link closes it as part of the same tap,
            // so the menu never survives a jump.
            <Show when=move || state.get().menu_open>
                <div class="nav-mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="nav-mobile-link"
                                    on:click=move |_| state.update(|s| *s = s.menu_closed())
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
