//! Scroll-position observer backing the navbar treatment.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::NavState;

/// Subscribe the navbar state to the window's vertical scroll position.
///
/// Call from the owning component's body. The offset is sampled once
/// immediately (a reload mid-page must start correct), then recomputed on
/// every scroll notification; the signal is written only when the flag
/// actually changed. The listener is removed when the owner is disposed.
/// Without a window (non-browser context) nothing registers and the default
/// `false` stands.
pub fn observe(state: RwSignal<NavState>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    publish_offset(state);

    let callback = Closure::<dyn Fn()>::new(move || publish_offset(state));
    if window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }

    // The closure moves into the cleanup hook, which keeps it alive for the
    // lifetime of the subscription.
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    });
}

fn publish_offset(state: RwSignal<NavState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(offset_y) = window.scroll_y() else {
        return;
    };
    let current = state.get_untracked();
    let next = current.with_scroll_offset(offset_y);
    if next != current {
        state.set(next);
    }
}
