use leptos::prelude::*;

use crate::catalog::{self, FeatureRow};
use crate::ui::SectionLabel;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionLabel number="03" text="FLIGHT SYSTEMS" />
                <h3 class="section-title centered">"Core Features"</h3>
                <div class="feature-list">
                    {catalog::feature_rows()
                        .into_iter()
                        .map(|row| view! { <FeatureBlock row=row /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureBlock(row: FeatureRow) -> impl IntoView {
    let FeatureRow { label, side, entry } = row;
    let sys_badge = format!("SYS_{label}");
    let icon = format!("https://placehold.co/100x100/e2e8f0/0f172a?text={label}");

    view! {
        <div class=side.row_class()>
            <div class="feature-media">
                <div class="feature-frame">
                    <img src=entry.image alt=entry.title />
                    <span class="feature-sys">{sys_badge}</span>
                </div>
            </div>
            <div class="feature-copy">
                <div class="feature-heading">
                    <span class="feature-icon">
                        <img src=icon alt="" />
                    </span>
                    <h4 class="feature-title">{entry.title}</h4>
                </div>
                <p class="feature-description">{entry.description}</p>
            </div>
        </div>
    }
}
