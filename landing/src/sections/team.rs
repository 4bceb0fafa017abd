use leptos::prelude::*;

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <h3 class="team-heading">"Flight Crew"</h3>
                <div class="team-grid">
                    <CrewCard
                        name="Daffa"
                        handle="daffarahman"
                        portrait="https://placehold.co/200x200/1e293b/fbbf24?text=Daffa"
                    />
                    <CrewCard
                        name="Asril"
                        handle="Syaasr"
                        portrait="https://placehold.co/200x200/1e293b/fbbf24?text=Asril"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CrewCard(
    name: &'static str,
    handle: &'static str,
    portrait: &'static str,
) -> impl IntoView {
    let profile = format!("https://github.com/{handle}");
    let at_handle = format!("@{handle}");

    view! {
        <div class="crew-card">
            <div class="crew-portrait">
                <img src=portrait alt=name />
            </div>
            <h4 class="crew-name">{name}</h4>
            <a href=profile target="_blank" class="crew-link">
                {at_handle}
            </a>
        </div>
    }
}
