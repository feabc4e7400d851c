use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Anchor, Skill, SKILLS, TECHNOLOGIES};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Anchor::Skills.id() class="py-32">
            <div class="container mx-auto px-6">
                <Reveal>
                    <h2 class="text-4xl md:text-5xl font-bold mb-16 text-center">
                        "Minhas " <span class="gradient-text">"Skills"</span>
                    </h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                let delay_ms = i as u32 * 100;
                                view! { <SkillCard skill delay_ms /> }
                            })
                            .collect_view()}
                    </div>
                    <Reveal delay_ms=400 class="mt-16 text-center">
                        <h3 class="text-2xl font-bold mb-6">"Tecnologias com as quais trabalho"</h3>
                        <div class="flex flex-wrap justify-center gap-4">
                            {TECHNOLOGIES
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-4 py-2 bg-muted text-foreground rounded-lg border border-border hover:border-primary transition-colors">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms class="transition-transform hover:scale-105">
            <div class="card p-8 text-center bg-card/50 backdrop-blur border-border/50 hover:border-primary/50 transition-all">
                <div class="w-16 h-16 mx-auto mb-4 rounded-full bg-primary/10 flex items-center justify-center">
                    <i class=format!("{} {} text-3xl", skill.icon.class(), skill.color.text_class())></i>
                </div>
                <h3 class="text-xl font-semibold text-foreground">{skill.label}</h3>
            </div>
        </Reveal>
    }
}
