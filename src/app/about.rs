use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Anchor, PROFILE};

const ICON_BUTTON: &str = "btn btn-icon border border-border hover:border-primary hover:text-primary";

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="py-32 relative">
            <div class="container mx-auto px-6">
                <Reveal class="max-w-4xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-8 text-center">
                        "Sobre " <span class="gradient-text">"Mim"</span>
                    </h2>
                    <div class="card p-8 md:p-12 bg-card/50 backdrop-blur border-border/50">
                        <p class="text-lg text-muted-foreground mb-6 leading-relaxed">
                            "Sou um desenvolvedor web e designer apaixonado, com um olhar aguçado para criar experiências digitais bonitas e funcionais. Minha jornada na tecnologia tem sido movida pela curiosidade e pelo desejo constante de aprender e inovar."
                        </p>
                        <p class="text-lg text-muted-foreground mb-8 leading-relaxed">
                            "Especializado em tecnologias web modernas, preencho a lacuna entre design e desenvolvimento para oferecer experiências de usuário perfeitas. Do conceito à implantação, garanto que cada projeto seja elaborado com atenção aos detalhes e ao desempenho."
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center">
                            <a
                                href=PROFILE.cv_path
                                download=PROFILE.cv_file_name()
                                class="btn border border-primary text-primary hover:bg-primary hover:text-primary-foreground"
                            >
                                "Download CV"
                            </a>
                            <div class="flex gap-4">
                                <a
                                    href=PROFILE.github_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=ICON_BUTTON
                                    aria-label="GitHub"
                                >
                                    <i class="devicon-github-plain"></i>
                                </a>
                                <a
                                    href=PROFILE.linkedin_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=ICON_BUTTON
                                    aria-label="LinkedIn"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                </a>
                                <a href=PROFILE.mailto() class=ICON_BUTTON aria-label="Email">
                                    <i class="icon-mail"></i>
                                </a>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
