use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::{nav_item, Anchor, NavItem, PROFILE};
use crate::scroll::HeroOverlay;

/// Overlay values for the current window scroll position.
pub fn use_hero_overlay() -> Signal<HeroOverlay> {
    let (_, scroll_y) = use_window_scroll();
    Signal::derive(move || HeroOverlay::from_progress(page_progress(scroll_y.get())))
}

#[cfg(feature = "hydrate")]
fn page_progress(offset: f64) -> f64 {
    let scroll_height = document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    crate::scroll::scroll_progress(offset, scroll_height, viewport_height)
}

// nothing scrolls during server rendering
#[cfg(not(feature = "hydrate"))]
fn page_progress(_offset: f64) -> f64 {
    0.0
}

#[component]
pub fn Hero(#[prop(into)] overlay: Signal<HeroOverlay>, on_select: Callback<NavItem>) -> impl IntoView {
    let jump = move |anchor: Anchor| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            on_select.run(nav_item(anchor));
        }
    };

    view! {
        <section
            id=Anchor::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div
                class="absolute inset-0 z-0 bg-cover bg-center opacity-40"
                style=format!("background-image: url({})", PROFILE.hero_background)
            ></div>
            <div
                class="absolute inset-0 bg-gradient-to-b from-transparent via-background/50 to-background z-10"
                style=move || overlay.get().style()
            ></div>

            <div class="container mx-auto px-6 relative z-20">
                <div class="text-center animate-rise">
                    <h2 class="text-5xl md:text-7xl font-bold mb-6">
                        <span class="gradient-text">{PROFILE.name}</span>
                        <br />
                        <span class="text-foreground">{PROFILE.headline}</span>
                    </h2>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-12 max-w-2xl mx-auto">
                        {PROFILE.tagline}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href=Anchor::Projects.href()
                            on:click=jump(Anchor::Projects)
                            class="btn btn-lg bg-primary hover:bg-primary/90 text-primary-foreground glow-primary"
                        >
                            "Projetos"
                        </a>
                        <a
                            href=Anchor::Contact.href()
                            on:click=jump(Anchor::Contact)
                            class="btn btn-lg border border-primary text-primary hover:bg-primary hover:text-primary-foreground"
                        >
                            "Contato"
                        </a>
                    </div>
                    <div class="mt-16">
                        <a
                            href=Anchor::About.href()
                            on:click=jump(Anchor::About)
                            class="inline-block animate-float text-primary text-3xl"
                            aria-label="Ir para Sobre"
                        >
                            "⌄"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
