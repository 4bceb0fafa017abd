// Recycopter Landing Page — Leptos 0.8 Edition
// Built by the Recycopter Dev Team (c)2024

mod catalog;
mod scroll;
mod sections;
mod state;
mod ui;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("error initializing log");

    // A broken catalog is a packaging mistake, not something to paper over
    // at render time. Refuse to mount.
    if let Err(err) = catalog::validate() {
        log::error!("content catalog rejected: {err}");
        panic!("content catalog rejected: {err}");
    }
    log::info!(
        "catalog ok: {} features, {} challenges, {} opportunities",
        catalog::FEATURES.len(),
        catalog::CHALLENGES.len(),
        catalog::OPPORTUNITIES.len(),
    );

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <Motto />
            <Mission />
            <Solution />
            <Features />
            <DevLog />
            <Team />
        </main>
        <Footer />
    }
}
