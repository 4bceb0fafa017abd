use leptos::prelude::*;

use super::ENGINE_TAG;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <div class="hero-grid">
                    <Poster />
                    <div class="hero-content">
                        <div class="hero-badge">{ENGINE_TAG}</div>
                        <h1 class="hero-title">
                            "RECY"
                            <span class="hero-title-accent">"COPTER"</span>
                        </h1>
                        <p class="hero-tagline">
                            "Take flight. Clean the world. Turn trash into treasure in this "
                            "high-fidelity recycling simulation."
                        </p>
                        // TODO: point these at the store pages once the Play
                        // Store / itch.io listings exist.
                        <div class="hero-actions">
                            <button class="btn btn-primary">"Download Now"</button>
                            <button class="btn btn-secondary">"View Source"</button>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Poster() -> impl IntoView {
    view! {
        <div class="hero-poster">
            <div class="poster-corner top-left"></div>
            <div class="poster-corner bottom-right"></div>
            <div class="poster-frame">
                <img
                    src="https://placehold.co/600x800/1e293b/fbbf24?text=Game+Poster"
                    alt="Recycopter game poster"
                />
            </div>
        </div>
    }
}
