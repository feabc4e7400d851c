use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Anchor, Project, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Anchor::Projects.id() class="py-32 bg-muted/30">
            <div class="container mx-auto px-6">
                <Reveal>
                    <h2 class="text-4xl md:text-5xl font-bold mb-16 text-center">
                        "Principais " <span class="gradient-text">"Projetos"</span>
                    </h2>
                    <ProjectList projects=PROJECTS />
                </Reveal>
            </div>
        </section>
    }
}

/// One card per project, in table order.
#[component]
pub fn ProjectList(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    let delay_ms = i as u32 * 100;
                    view! { <ProjectCard project delay_ms /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal delay_ms class="h-full transition-transform hover:-translate-y-2">
            <article class="card h-full p-6 bg-card/50 backdrop-blur border-border/50 hover:border-primary/50 transition-all">
                <h3 class="text-2xl font-bold mb-3 text-foreground">{project.title}</h3>
                <p class="text-muted-foreground mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 text-xs bg-primary/10 text-primary rounded-full border border-primary/20">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.repository_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-sm border border-border hover:border-primary hover:text-primary"
                    >
                        <i class="devicon-github-plain mr-2"></i>
                        "Código"
                    </a>
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-sm bg-primary hover:bg-primary/90 text-primary-foreground"
                    >
                        <i class="icon-external-link mr-2"></i>
                        "Demonstração"
                    </a>
                </div>
            </article>
        </Reveal>
    }
}
