use leptos::prelude::*;

use crate::ui::SectionLabel;

#[component]
pub fn Solution() -> impl IntoView {
    view! {
        <section class="solution">
            <div class="container">
                <div class="split-grid">
                    <div class="split-visual">
                        <div class="framed-media offset-deco">
                            <img
                                src="https://live-production.wcms.abc-cdn.net.au/7e8a8a6027d833fc81c00e70bd40f1ce?impolicy=wcms_crop_resize&cropH=3333&cropW=5000&xPos=0&yPos=0&width=862&height=575"
                                alt="Gameplay solution"
                            />
                        </div>
                    </div>
                    <div class="split-copy">
                        <SectionLabel number="02" text="TACTICAL SOLUTION" />
                        <h3 class="section-title">"Trash to Treasure"</h3>
                        <p class="section-body">
                            "We constructed a gamified solution: "
                            <strong class="highlight">"Pickup, Craft, Profit."</strong>
                        </p>
                        <p class="section-body">
                            "Pilot your specialized Recycopter to scour the island for debris. But "
                            "picking it up is just the start. Transport waste to processing "
                            "facilities, craft useful materials, and convert pollution into pure "
                            "profit. It's an economic loop that saves the world."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
