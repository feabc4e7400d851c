use leptos::{ev::SubmitEvent, prelude::*};

use super::reveal::Reveal;
use crate::contact::{ContactForm, Field};
use crate::content::{Anchor, PROFILE};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-border bg-background text-foreground placeholder-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary";
const SOCIAL_CLASS: &str = "text-muted-foreground hover:text-primary transition-colors text-2xl";

/// Contact form. Field values live in `form`, owned by the page; the browser
/// enforces `required` and the email format before `on_submit` runs.
#[component]
pub fn ContactSection<F>(form: RwSignal<ContactForm>, on_submit: F) -> impl IntoView
where
    F: Fn(SubmitEvent) + Send + 'static,
{
    let value = move |field: Field| move || form.with(|f| f.get(field).to_string());
    let update = move |field: Field| {
        move |ev: leptos::ev::Event| {
            let v = event_target_value(&ev);
            form.update(|f| f.set(field, v));
        }
    };

    view! {
        <section id=Anchor::Contact.id() class="py-32 bg-muted/30">
            <div class="container mx-auto px-6">
                <Reveal class="max-w-2xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-8 text-center">
                        "Entre em " <span class="gradient-text">"Contato"</span>
                    </h2>
                    <p class="text-center text-muted-foreground mb-12 text-lg">
                        "Tem algum projeto em mente? Entre em contato!"
                    </p>
                    <div class="card p-8 bg-card/50 backdrop-blur border-border/50">
                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <label for="name" class="block text-sm font-medium mb-2 text-foreground">
                                    "Nome"
                                </label>
                                <input
                                    id="name"
                                    name=Field::Name.name()
                                    placeholder="Seu nome"
                                    required
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Name)
                                    on:input=update(Field::Name)
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium mb-2 text-foreground">
                                    "Email"
                                </label>
                                <input
                                    id="email"
                                    name=Field::Email.name()
                                    type="email"
                                    placeholder="Seu.email@exemplo.com"
                                    required
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Email)
                                    on:input=update(Field::Email)
                                />
                            </div>
                            <div>
                                <label for="message" class="block text-sm font-medium mb-2 text-foreground">
                                    "Mensagem"
                                </label>
                                <textarea
                                    id="message"
                                    name=Field::Message.name()
                                    placeholder="Deixe uma mensagem..."
                                    rows=5
                                    required
                                    class=INPUT_CLASS
                                    prop:value=value(Field::Message)
                                    on:input=update(Field::Message)
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="btn w-full bg-primary hover:bg-primary/90 text-primary-foreground glow-primary"
                            >
                                <i class="icon-send mr-2"></i>
                                "Enviar Mensagem"
                            </button>
                        </form>
                        <div class="mt-8 flex justify-center gap-6">
                            <a
                                href=PROFILE.github_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=SOCIAL_CLASS
                                aria-label="GitHub"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href=PROFILE.linkedin_url
                                target="_blank"
                                rel="noopener noreferrer"
                                class=SOCIAL_CLASS
                                aria-label="LinkedIn"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a href=format!("mailto:{}", PROFILE.email) class=SOCIAL_CLASS aria-label="Email">
                                <i class="icon-mail"></i>
                            </a>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
