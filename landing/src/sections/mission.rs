use leptos::prelude::*;

use crate::ui::SectionLabel;

#[component]
pub fn Mission() -> impl IntoView {
    view! {
        <section id="about" class="mission">
            <div class="container">
                <div class="split-grid">
                    <div class="split-copy">
                        <SectionLabel number="01" text="MISSION BRIEFING" />
                        <h3 class="section-title">"Why We Build This"</h3>
                        <p class="section-body">
                            "The borderline is clear: "
                            <strong class="highlight">
                                "we need to educate people on why recycling matters."
                            </strong>
                        </p>
                        <p class="section-body">
                            "Waste accumulation is threatening our ecosystem. Recycopter isn't "
                            "just a game; it's a simulation of responsibility. We aim to show the "
                            "direct correlation between effort (collecting) and outcome (a cleaner "
                            "world), packaged in an engaging flight experience."
                        </p>
                    </div>
                    <div class="split-visual">
                        <div class="framed-media">
                            <img
                                src="https://miro.medium.com/1*Lth3QLLEL0tVVreYVahHKA.jpeg"
                                alt="Environmental damage report"
                            />
                            <div class="hud-corner hud-top-left"></div>
                            <div class="hud-corner hud-top-right"></div>
                            <div class="hud-corner hud-bottom-left"></div>
                            <div class="hud-corner hud-bottom-right"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
