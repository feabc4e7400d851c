mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod toaster;

use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::contact::ContactForm;
use crate::content::{NavItem, PROFILE};
use crate::nav::MenuState;
use crate::toast::{Notification, ToastId, Toasts};

use about::About;
use contact::ContactSection;
use footer::Footer;
use hero::{use_hero_overlay, Hero};
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use toaster::Toaster;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=PROFILE.favicon />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="Portfólio" />
        <Meta name="description" content="Portfólio de Eduardo Aparecido, desenvolvedor front-end." />

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=path!("/") view=Page />
            </Routes>
        </Router>
    }
}

/// The whole portfolio. Owns every piece of interactive state and hands
/// children plain values and callbacks.
#[component]
fn Page() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let form = RwSignal::new(ContactForm::default());
    let toasts = RwSignal::new(Toasts::default());
    let overlay = use_hero_overlay();

    let on_toggle = Callback::new(move |_: ()| menu.update(|m| m.toggle()));
    let on_select = Callback::new(move |item: NavItem| {
        let mut state = menu.get_untracked();
        let anchor = state.select(&item);
        menu.set(state);
        #[cfg(feature = "hydrate")]
        crate::nav::scroll_to_anchor(anchor);
        #[cfg(not(feature = "hydrate"))]
        let _ = anchor;
    });

    let notify = move |notification: Notification| {
        let id = toasts.try_update(|t| t.push(notification));
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            set_timeout(
                move || {
                    toasts.update(|t| {
                        t.dismiss(id);
                    });
                },
                crate::toast::TOAST_DURATION,
            );
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };
    let on_dismiss = Callback::new(move |id: ToastId| {
        toasts.update(|t| {
            t.dismiss(id);
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::config::EmailConfig;
            use crate::contact::{submit, EmailJsSender};

            let snapshot = form.get_untracked();
            leptos::task::spawn_local(async move {
                let config = EmailConfig::from_build_env();
                match submit(&EmailJsSender, &config, &snapshot).await {
                    Ok(outcome) => {
                        notify(outcome.notification());
                        form.update(|f| outcome.apply(f));
                    }
                    Err(e) => log::warn!("contact form blocked before sending: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = notify;
    };

    view! {
        <div class="min-h-screen bg-background">
            <Navbar menu on_toggle on_select />
            <Hero overlay on_select />
            <About />
            <Projects />
            <Skills />
            <ContactSection form on_submit />
            <Footer on_select />
            <Toaster toasts=Signal::derive(move || toasts.get().visible().to_vec()) on_dismiss />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::{ev::SubmitEvent, prelude::*};

    use super::contact::ContactSection;
    use super::projects::ProjectList;
    use crate::contact::{ContactForm, Field};
    use crate::content::{Project, PROJECTS};

    fn render(projects: &'static [Project]) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <ProjectList projects /> }.to_html())
    }

    #[test]
    fn test_one_card_per_project_in_order() {
        let html = render(PROJECTS);
        assert_eq!(html.matches("<article").count(), PROJECTS.len());

        let positions = PROJECTS
            .iter()
            .map(|p| html.find(p.title).expect("title should render"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        for project in PROJECTS {
            assert!(html.contains(project.description));
            assert!(html.contains(&format!("href=\"{}\"", project.repository_url)));
            assert!(html.contains(&format!("href=\"{}\"", project.demo_url)));
        }
    }

    #[test]
    fn test_tags_render_in_listed_order() {
        let html = render(&PROJECTS[1..2]);
        let positions = PROJECTS[1]
            .technologies
            .iter()
            .map(|t| html.find(&format!(">{t}<")).expect("tag should render"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_project_table() {
        let html = render(&[]);
        assert_eq!(html.matches("<article").count(), 0);
    }

    #[test]
    fn test_contact_form_fields_are_required() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let form = RwSignal::new(ContactForm::default());
            view! { <ContactSection form on_submit=move |_: SubmitEvent| form.update(|f| f.clear()) /> }
                .to_html()
        });

        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("type=\"email\""));
        for field in Field::ALL {
            assert!(html.contains(&format!("name=\"{}\"", field.name())), "{field}");
        }
        assert_eq!(html.matches("required").count(), Field::ALL.len());
    }
}
