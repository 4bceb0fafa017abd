use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"♻"</span>
                    <span class="footer-title">"RECYCOPTER"</span>
                </div>
                <div class="footer-copyright">
                    "© 2024 RECYCOPTER DEV TEAM. ALL RIGHTS RESERVED."
                </div>
                <div class="footer-status">
                    <span class="footer-arrow">"→"</span>
                    <span class="footer-ready">"READY FOR TAKEOFF"</span>
                </div>
            </div>
        </footer>
    }
}
