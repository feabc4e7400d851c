use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{NavItem, NAV_ITEMS};
use crate::nav::MenuState;

#[component]
pub fn Navbar(
    #[prop(into)] menu: Signal<MenuState>,
    on_toggle: Callback<()>,
    on_select: Callback<NavItem>,
) -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-lg border-b border-border animate-slide-down">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold gradient-text transition-transform hover:scale-105">
                        "PORTFÓLIO"
                    </h1>
                    <div class="hidden md:flex items-center gap-8">
                        <NavLinks on_select class="text-foreground hover:text-primary transition-colors" />
                    </div>
                    <button
                        class="md:hidden text-foreground text-2xl"
                        aria-label=move || menu.get().toggle_label()
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| on_toggle.run(())
                    >
                        {move || menu.get().glyph()}
                    </button>
                </div>
                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden mt-4 flex flex-col gap-4 animate-fade-in">
                        <NavLinks on_select class="text-foreground hover:text-primary transition-colors" />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Anchor links for every nav item. Clicking one goes through `on_select`
/// so the mobile panel closes before scrolling.
#[component]
pub fn NavLinks(
    on_select: Callback<NavItem>,
    #[prop(optional)] items: Option<&'static [NavItem]>,
    #[prop(into)] class: String,
) -> impl IntoView {
    items
        .unwrap_or(NAV_ITEMS)
        .iter()
        .map(|item| {
            let item = *item;
            view! {
                <a
                    href=item.anchor.href()
                    class=class.clone()
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        on_select.run(item);
                    }
                >
                    {item.label}
                </a>
            }
        })
        .collect_view()
}
