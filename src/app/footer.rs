use leptos::prelude::*;

use super::navbar::NavLinks;
use crate::content::{NavItem, FOOTER_LINKS};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(on_select: Callback<NavItem>) -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-border">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <p class="text-muted-foreground">{format!("© {BUILD_YEAR} Portfólio.")}</p>
                    <div class="flex gap-6">
                        <NavLinks
                            on_select
                            items=FOOTER_LINKS
                            class="text-muted-foreground hover:text-primary transition-colors"
                        />
                    </div>
                    <button
                        class="text-muted-foreground hover:text-primary transition-colors"
                        on:click=move |_| {
                            #[cfg(feature = "hydrate")]
                            crate::nav::scroll_to_top();
                        }
                    >
                        "↑ Voltar ao topo"
                    </button>
                </div>
            </div>
        </footer>
    }
}
