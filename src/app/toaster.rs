use leptos::prelude::*;

use crate::toast::{Toast, ToastId, Variant};

#[component]
pub fn Toaster(#[prop(into)] toasts: Signal<Vec<Toast>>, on_dismiss: Callback<ToastId>) -> impl IntoView {
    view! {
        <ol class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full md:max-w-[420px]">
            <For each=move || toasts.get() key=|t| t.id let:toast>
                <li
                    role="status"
                    class=match toast.notification.variant {
                        Variant::Default => "toast border-border bg-background text-foreground",
                        Variant::Destructive => "toast border-destructive bg-destructive text-destructive-foreground",
                    }
                >
                    <div class="grid gap-1">
                        <div class="text-sm font-semibold">{toast.notification.title}</div>
                        <div class="text-sm opacity-90">{toast.notification.description}</div>
                    </div>
                    <button
                        class="absolute right-2 top-2 opacity-70 hover:opacity-100"
                        aria-label="Fechar"
                        on:click=move |_| on_dismiss.run(toast.id)
                    >
                        "✕"
                    </button>
                </li>
            </For>
        </ol>
    }
}
