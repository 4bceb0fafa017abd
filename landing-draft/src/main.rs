// Recycopter Landing Page — desktop draft, Leptos 0.8
// Built by the Recycopter Dev Team (c)2024
//
// First cut of the site, desktop layout only. Superseded by the responsive
// revision in ../landing but kept in-repo as the historical draft.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const SCROLL_THRESHOLD_PX: f64 = 50.0;

struct Feature {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Endless Gameplay Levels",
        description: "Let's see how many levels and trashes you can collect and recycle!",
        image: "img/gameplay1.png",
    },
    Feature {
        title: "Immersive 3D World",
        description: "Explore a vast, low-poly archipelago teeming with environmental challenges.",
        image: "https://placehold.co/600x400/0f172a/f59e0b?text=Immersive+3D+World",
    },
    Feature {
        title: "Character Switching",
        description: "Adapt to the mission. Switch between pilots to utilize different skills.",
        image: "img/character-switching.png",
    },
    Feature {
        title: "Picking Up Trash",
        description: "Master the physics-based claw mechanism to clean up the islands.",
        image: "img/heli-pickup-trash.png",
    },
    Feature {
        title: "Recycle, Craft, Profit",
        description: "Process raw waste into usable materials through the crafting system.",
        image: "img/crafting.png",
    },
    Feature {
        title: "Adrenaline",
        description: "Keep your eye on the fuel, or else....",
        image: "img/buy-fuel.png",
    },
];

const CHALLENGES: &[&str] = &[
    "Built on LibGDX (Java) - A raw coding challenge compared to Unity/Godot engines.",
    "Spontaneous Game Concept - Iterative design process.",
    "Small Squad - Only two developers handling code, art, and design.",
];

const OPPORTUNITIES: &[&str] = &[
    "Scalable Gameplay - Potential for larger maps and complex economies.",
    "Multi-Platform Publishing - Targeting Play Store, Steam, and Itch.io.",
    "Online Multiplayer - Future coop rescue missions.",
    "Monetization - Sustainable aesthetic models.",
];

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
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

// ============================================
// Navigation — transparent until scrolled
// ============================================
#[component]
fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    if let Some(window) = web_sys::window() {
        let publish = move || {
            if let Some(win) = web_sys::window() {
                if let Ok(offset_y) = win.scroll_y() {
                    let past = offset_y > SCROLL_THRESHOLD_PX;
                    if past != scrolled.get_untracked() {
                        set_scrolled.set(past);
                    }
                }
            }
        };
        publish();
        let callback = Closure::<dyn Fn()>::new(publish);
        if window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            on_cleanup(move || {
                if let Some(win) = web_sys::window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            });
        }
    }

    view! {
        <nav class=move || if scrolled.get() { "nav nav-solid" } else { "nav" }>
            <div class="nav-inner">
                <div class="nav-brand">
                    <span class="nav-logo">"♻"</span>
                    <span class="nav-title">"RECYCOPTER"</span>
                </div>
                <div class="nav-links">
                    <a href="#about" class="nav-link">"BRIEFING"</a>
                    <a href="#features" class="nav-link">"SYSTEMS"</a>
                    <a href="#devlog" class="nav-link">"LOGS"</a>
                    <a href="#team" class="nav-link">"SQUAD"</a>
                </div>
            </div>
        </nav>
    }
}

// ============================================
// Hero
// ============================================
#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <div class="hero-grid">
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
                    <div class="hero-content">
                        <div class="hero-badge">"LIBGDX ENGINE // JAVA BASE"</div>
                        <h1 class="hero-title">
                            "RECY"
                            <span class="hero-title-accent">"COPTER"</span>
                        </h1>
                        <p class="hero-tagline">
                            "Take flight. Clean the world. Turn trash into treasure in this "
                            "high-fidelity recycling simulation."
                        </p>
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

// ============================================
// Motto divider
// ============================================
#[component]
fn Motto() -> impl IntoView {
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

// ============================================
// Mission briefing
// ============================================
#[component]
fn Mission() -> impl IntoView {
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
                            "direct correlation between effort (collecting) and outcome (a "
                            "cleaner world), packaged in an engaging flight experience."
                        </p>
                    </div>
                    <div class="split-visual">
                        <div class="framed-media">
                            <img
                                src="https://miro.medium.com/1*Lth3QLLEL0tVVreYVahHKA.jpeg"
                                alt="Environmental damage report"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

// ============================================
// Tactical solution
// ============================================
#[component]
fn Solution() -> impl IntoView {
    view! {
        <section class="solution">
            <div class="container">
                <div class="split-grid">
                    <div class="split-visual">
                        <div class="framed-media">
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
                            "Pilot your specialized Recycopter to scour the island for debris. "
                            "But picking it up is just the start. Transport waste to processing "
                            "facilities, craft useful materials, and convert pollution into pure "
                            "profit. It's an economic loop that saves the world."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

// ============================================
// Feature showcase — alternating rows
// ============================================
#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionLabel number="03" text="FLIGHT SYSTEMS" />
                <h3 class="section-title centered">"Core Features"</h3>
                <div class="feature-list">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(idx, feature)| {
                            let row_class = if idx % 2 == 1 {
                                "feature-row reverse"
                            } else {
                                "feature-row"
                            };
                            let sys_badge = format!("SYS_{:02}", idx + 1);
                            view! {
                                <div class=row_class>
                                    <div class="feature-media">
                                        <div class="feature-frame">
                                            <img src=feature.image alt=feature.title />
                                            <span class="feature-sys">{sys_badge}</span>
                                        </div>
                                    </div>
                                    <div class="feature-copy">
                                        <h4 class="feature-title">{feature.title}</h4>
                                        <p class="feature-description">{feature.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

// ============================================
// Development log — challenges & opportunities
// ============================================
#[component]
fn DevLog() -> impl IntoView {
    view! {
        <section id="devlog" class="devlog">
            <div class="container">
                <SectionLabel number="04" text="DEVELOPMENT LOG" />
                <div class="devlog-grid">
                    <div class="log-panel log-red">
                        <h3 class="log-title">
                            <span class="log-glyph">"⚠"</span>
                            "Challenges"
                        </h3>
                        <ul class="log-list">
                            {CHALLENGES
                                .iter()
                                .enumerate()
                                .map(|(idx, item)| {
                                    view! {
                                        <li class="log-item">
                                            <span class="log-index">{format!("{:02}", idx + 1)}</span>
                                            <p class="log-text">{*item}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="log-panel log-green">
                        <h3 class="log-title">
                            <span class="log-glyph">"◎"</span>
                            "Opportunities"
                        </h3>
                        <ul class="log-list">
                            {OPPORTUNITIES
                                .iter()
                                .enumerate()
                                .map(|(idx, item)| {
                                    view! {
                                        <li class="log-item">
                                            <span class="log-index">{format!("{:02}", idx + 1)}</span>
                                            <p class="log-text">{*item}</p>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

// ============================================
// Flight crew
// ============================================
#[component]
fn Team() -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <h3 class="team-heading">"Flight Crew"</h3>
                <div class="team-grid">
                    <div class="crew-card">
                        <div class="crew-portrait">
                            <img
                                src="https://placehold.co/200x200/1e293b/fbbf24?text=Daffa"
                                alt="Daffa"
                            />
                        </div>
                        <h4 class="crew-name">"Daffa"</h4>
                        <a href="https://github.com/daffarahman" target="_blank" class="crew-link">
                            "@daffarahman"
                        </a>
                    </div>
                    <div class="crew-card">
                        <div class="crew-portrait">
                            <img
                                src="https://placehold.co/200x200/1e293b/fbbf24?text=Asril"
                                alt="Asril"
                            />
                        </div>
                        <h4 class="crew-name">"Asril"</h4>
                        <a href="https://github.com/Syaasr" target="_blank" class="crew-link">
                            "@Syaasr"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

// ============================================
// Footer
// ============================================
#[component]
fn Footer() -> impl IntoView {
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

// ============================================
// Shared bits
// ============================================
#[component]
fn SectionLabel(number: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="section-label">
            <span class="section-label-line"></span>
            <span class="section-label-text">{number} " // " {text}</span>
        </div>
    }
}
