//! Static page content: navigation, projects, skills and profile links.

use std::fmt;

/// In-page navigation targets. Every section of the page has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Projects,
        Anchor::Skills,
        Anchor::Contact,
    ];

    /// Element id of the section
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: Anchor,
}

const HOME: NavItem = NavItem {
    label: "Home",
    anchor: Anchor::Home,
};
const ABOUT: NavItem = NavItem {
    label: "Sobre",
    anchor: Anchor::About,
};
const PROJECTS_LINK: NavItem = NavItem {
    label: "Projetos",
    anchor: Anchor::Projects,
};
const SKILLS_LINK: NavItem = NavItem {
    label: "Skills",
    anchor: Anchor::Skills,
};
const CONTACT: NavItem = NavItem {
    label: "Contato",
    anchor: Anchor::Contact,
};

pub const NAV_ITEMS: &[NavItem] = &[HOME, ABOUT, PROJECTS_LINK, SKILLS_LINK, CONTACT];

/// Nav entry pointing at `anchor`.
pub fn nav_item(anchor: Anchor) -> NavItem {
    NAV_ITEMS
        .iter()
        .copied()
        .find(|i| i.anchor == anchor)
        .unwrap_or(NavItem {
            label: anchor.id(),
            anchor,
        })
}

// the footer skips the skills section
pub const FOOTER_LINKS: &[NavItem] = &[HOME, ABOUT, PROJECTS_LINK, CONTACT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub repository_url: &'static str,
    pub demo_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Painel de Chamados",
        description: "Projeto Full-stack para administrar abertura de chamados em pequenas empresas.",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "Database"],
        repository_url: "https://github.com/Eduardo-Aparecido/painel-de-chamados",
        demo_url: "https://painel-chamados.infinityfreeapp.com/",
    },
    Project {
        title: "Página de Divulgação",
        description: "Criada para divulgar locais e eventos nas cidades.",
        technologies: &["React", "TypeScript", "Supabase", "Vercel"],
        repository_url: "https://github.com/Eduardo-Aparecido/ROUTS-PROJECT",
        demo_url: "https://routs-project.vercel.app/",
    },
    Project {
        title: "Controle de Estoque",
        description: "Projeto Full-stack para monitorar o estoque com logs e permissionamento.",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "Database"],
        repository_url: "https://github.com/Eduardo-Aparecido/controle-de-estoque",
        demo_url: "https://controle-de-estoque.infinityfree.me/index.php?page=login",
    },
];

/// Glyph shown on a skill card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Palette,
    Database,
    Smartphone,
}

impl SkillIcon {
    pub fn class(self) -> &'static str {
        match self {
            SkillIcon::Code => "icon-code",
            SkillIcon::Palette => "icon-palette",
            SkillIcon::Database => "icon-database",
            SkillIcon::Smartphone => "icon-smartphone",
        }
    }
}

/// Accent color of a skill card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Electric,
    NeonPurple,
    NeonGreen,
}

impl ColorToken {
    pub fn text_class(self) -> &'static str {
        match self {
            ColorToken::Electric => "text-electric",
            ColorToken::NeonPurple => "text-neon-purple",
            ColorToken::NeonGreen => "text-neon-green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub icon: SkillIcon,
    pub color: ColorToken,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        label: "Frontend Dev",
        icon: SkillIcon::Code,
        color: ColorToken::Electric,
    },
    Skill {
        label: "UI/UX Design",
        icon: SkillIcon::Palette,
        color: ColorToken::NeonPurple,
    },
    Skill {
        label: "Backend Dev",
        icon: SkillIcon::Database,
        color: ColorToken::NeonGreen,
    },
    Skill {
        label: "Mobile Dev",
        icon: SkillIcon::Smartphone,
        color: ColorToken::Electric,
    },
];

pub const TECHNOLOGIES: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "TypeScript",
    "Node.js",
    "TailwindCSS",
    "PHP",
    "phpMyAdmin",
];

/// Who the page is about and where to find them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub email: &'static str,
    pub cv_path: &'static str,
    pub hero_background: &'static str,
    pub favicon: &'static str,
    pub mail_subject: &'static str,
    pub mail_body: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Eduardo Aparecido",
    headline: "Desenvolvedor Front-end",
    tagline: "Criando experiências digitais.",
    github_url: "https://github.com/Eduardo-Aparecido",
    linkedin_url: "https://www.linkedin.com/in/eduardo-aparecido-b8858753/",
    email: "aparecidoj.edu@gmail.com",
    cv_path: "/curriculo.pdf",
    hero_background: "/hero-bg.svg",
    favicon: "/favicon.svg",
    mail_subject: "Contato via Portfólio",
    mail_body: "Olá Eduardo, tudo bem? Gostaria de falar sobre...",
};

impl Profile {
    /// `mailto:` link with the subject and greeting filled in.
    pub fn mailto(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            urlencoding::encode(self.mail_subject),
            urlencoding::encode(self.mail_body)
        )
    }

    /// File name offered when downloading the CV
    pub fn cv_file_name(&self) -> &'static str {
        self.cv_path.rsplit('/').next().unwrap_or(self.cv_path)
    }

    /// Site-relative paths of the static files the page links to. Each is
    /// served out of `public/`.
    pub fn assets(&self) -> [&'static str; 3] {
        [self.cv_path, self.hero_background, self.favicon]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_items_cover_every_anchor_once() {
        let anchors = NAV_ITEMS.iter().map(|i| i.anchor).collect::<Vec<_>>();
        assert_eq!(anchors, Anchor::ALL.to_vec());

        let labels = NAV_ITEMS.iter().map(|i| i.label).collect::<HashSet<_>>();
        assert_eq!(labels.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_anchor_href() {
        assert_eq!(Anchor::Home.href(), "#home");
        assert_eq!(Anchor::About.href(), "#about");
        assert_eq!(Anchor::Projects.href(), "#projects");
        assert_eq!(Anchor::Skills.href(), "#skills");
        assert_eq!(Anchor::Contact.href(), "#contact");
        assert_eq!(Anchor::Contact.to_string(), "contact");
    }

    #[test]
    fn test_nav_item_lookup() {
        for anchor in Anchor::ALL {
            assert_eq!(nav_item(anchor).anchor, anchor);
        }
        assert_eq!(nav_item(Anchor::About).label, "Sobre");
    }

    #[test]
    fn test_footer_links() {
        let labels = FOOTER_LINKS.iter().map(|i| i.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Home", "Sobre", "Projetos", "Contato"]);
    }

    #[test]
    fn test_projects_have_links_and_tags() {
        assert_eq!(PROJECTS.len(), 3);
        for project in PROJECTS {
            assert!(!project.technologies.is_empty());
            assert!(project.repository_url.starts_with("https://github.com/"));
            assert!(project.demo_url.starts_with("https://"));
        }
        let titles = PROJECTS.iter().map(|p| p.title).collect::<HashSet<_>>();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn test_skill_tokens() {
        assert_eq!(SKILLS[0].icon.class(), "icon-code");
        assert_eq!(SKILLS[1].color.text_class(), "text-neon-purple");
        assert_eq!(SKILLS[2].color, ColorToken::NeonGreen);
        assert_eq!(SKILLS[3].icon, SkillIcon::Smartphone);
    }

    #[test]
    fn test_mailto_is_encoded() {
        let link = PROFILE.mailto();
        assert!(link.starts_with("mailto:aparecidoj.edu@gmail.com?subject="));
        assert!(link.contains("subject=Contato%20via%20Portf%C3%B3lio"));
        assert!(link.contains("&body=Ol%C3%A1%20Eduardo"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_cv_file_name() {
        assert_eq!(PROFILE.cv_file_name(), "curriculo.pdf");
    }

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in PROFILE.assets() {
            let rel = asset.strip_prefix('/').expect("asset paths are site-absolute");
            let file = public.join(rel);
            assert!(file.is_file(), "{} is not shipped", file.display());
        }

        let cv = std::fs::read(public.join(PROFILE.cv_file_name())).expect("cv is readable");
        assert!(cv.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_profile_links_are_real() {
        assert_ne!(PROFILE.github_url, "https://github.com");
        assert_ne!(PROFILE.linkedin_url, "https://linkedin.com");
        assert!(!PROFILE.email.ends_with("example.com"));
    }
}
