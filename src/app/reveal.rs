use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::scroll::Reveal as RevealLatch;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let latch = RwSignal::new(RevealLatch::default());

    Effect::new(move |_| {
        if visible.get() && !latch.get_untracked().is_shown() {
            latch.update(|l| {
                l.observe(true);
            });
        }
    });

    view! {
        <div
            node_ref=el
            class=move || format!("transition-all duration-700 ease-out {} {class}", latch.get().class())
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
