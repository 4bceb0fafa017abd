use leptos::prelude::*;

/// Full-bleed divider between the hero and the briefing sections: two muted
/// gameplay feeds behind the slogan card.
#[component]
pub fn Motto() -> impl IntoView {
    view! {
        <section class="motto">
            <div class="motto-backgrounds">
                <div class="motto-cam">
                    <img src="img/gameplay1.png" alt="Gameplay environment, left camera" />
                    <span class="cam-tag cam-top-left">"CAM_01 [REC]"</span>
                </div>
                <div class="motto-cam">
                    <img src="img/gameplay2.png" alt="Gameplay environment, right camera" />
                    <span class="cam-tag cam-bottom-right">"CAM_02 [LIVE]"</span>
                </div>
            </div>
            <div class="motto-card-wrap">
                <div class="motto-card">
                    <h2 class="motto-heading">
                        "Save the earth"
                        <br />
                        <span class="motto-accent">"from trash"</span>
                        <br />
                        "by recycling"
                    </h2>
                </div>
            </div>
        </section>
    }
}
