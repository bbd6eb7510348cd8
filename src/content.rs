//! Static site content: identity, navigation anchors, projects and skills.
//! Translatable copy lives in the locale catalogs; this module only holds
//! what is the same in every language.

use crate::gallery::Project;
use crate::i18n::Catalog;
use crate::skills::{Skill, SkillCategory};

pub const OWNER_NAME: &str = "Camille Laurent";
pub const BRAND: &str = "<CAMILLE.DEV/>";
pub const CONTACT_EMAIL: &str = "hello@camille-laurent.dev";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/camille-laurent";
pub const LINKEDIN_PROFILE_URL: &str = "https://www.linkedin.com/in/camille-laurent-dev";

/// Canonical site URL; overridable at build time with `PORTFOLIO_SITE_URL`.
pub const SITE_URL: &str = match option_env!("PORTFOLIO_SITE_URL") {
    Some(url) => url,
    None => "https://camille-laurent.dev/",
};
pub const SOCIAL_IMAGE: &str = "https://camille-laurent.dev/social-card.jpg";

pub const HERO_STACKS: [&str; 3] = [
    "React • TypeScript • Node.js",
    "GraphQL • PostgreSQL • AWS",
    "React Native • Kubernetes • Terraform",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label_key: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn section_id(&self) -> &'static str {
        self.anchor.trim_start_matches('#')
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label_key: "nav.about",
        anchor: "#about",
    },
    NavLink {
        label_key: "nav.skills",
        anchor: "#skills",
    },
    NavLink {
        label_key: "nav.projects",
        anchor: "#projects",
    },
    NavLink {
        label_key: "nav.contact",
        anchor: "#contact",
    },
];

/// Language-independent part of a project; copy is looked up under
/// `projects.items.<slug>`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectSeed {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: &'static str,
    pub date_published: Option<&'static str>,
    pub client: Option<&'static str>,
}

impl ProjectSeed {
    pub fn description_key(&self) -> String {
        format!("projects.items.{}.description", self.slug)
    }

    pub fn details_key(&self) -> String {
        format!("projects.items.{}.details", self.slug)
    }

    pub fn localize(&self, catalog: &Catalog) -> Project {
        Project {
            id: self.id,
            title: self.title.to_string(),
            description: catalog.translate(&self.description_key()),
            details: catalog.translate(&self.details_key()),
            image: self.image.to_string(),
            technologies: self.technologies.iter().map(|tech| tech.to_string()).collect(),
            link: self.link.to_string(),
            date_published: self.date_published.map(str::to_string),
            client: self.client.map(str::to_string),
        }
    }
}

pub const PROJECT_SEEDS: [ProjectSeed; 6] = [
    ProjectSeed {
        id: 1,
        slug: "harbor-ledger",
        title: "Harbor Ledger",
        image: "/projects/harbor-ledger.webp",
        technologies: &["React", "TypeScript", "Go", "PostgreSQL", "Kafka", "AWS"],
        link: "https://harborledger.example.com",
        date_published: Some("2025"),
        client: Some("Harbor Ledger"),
    },
    ProjectSeed {
        id: 2,
        slug: "trailhead-maps",
        title: "Trailhead Maps",
        image: "/projects/trailhead-maps.webp",
        technologies: &["React Native", "TypeScript", "GraphQL", "Redis", "Node.js"],
        link: "https://trailheadmaps.example.com",
        date_published: Some("2024"),
        client: Some("Trailhead Outdoors"),
    },
    ProjectSeed {
        id: 3,
        slug: "atelier-booking",
        title: "Atelier Booking",
        image: "/projects/atelier-booking.jpg",
        technologies: &["NestJS", "PostgreSQL", "Terraform", "AWS"],
        link: "https://atelier-booking.example.com",
        date_published: Some("2023"),
        client: Some("Atelier Collectif"),
    },
    ProjectSeed {
        id: 4,
        slug: "nightowl-radio",
        title: "Nightowl Radio",
        image: "/projects/nightowl-radio.jpg",
        technologies: &["Next.js", "TypeScript", "HLS"],
        link: "https://nightowl-radio.example.com",
        date_published: Some("2022"),
        client: None,
    },
    ProjectSeed {
        id: 5,
        slug: "greenhouse-sensors",
        title: "Greenhouse Sensors",
        image: "/projects/greenhouse-sensors.webp",
        technologies: &[
            "Rust",
            "MQTT",
            "InfluxDB",
            "Grafana",
            "Kubernetes",
            "Python",
            "Embedded Systems",
        ],
        link: "https://greenhouse.example.com",
        date_published: Some("2020"),
        client: Some("Serres Urbaines"),
    },
    ProjectSeed {
        id: 6,
        slug: "brief-studio",
        title: "Brief Studio",
        image: "/projects/brief-studio.jpg",
        technologies: &["React", "Storybook", "Figma", "Playwright", "GitHub Actions"],
        link: "https://briefstudio.example.com",
        date_published: Some("2019"),
        client: Some("Brief Studio"),
    },
];

pub fn projects(catalog: &Catalog) -> Vec<Project> {
    PROJECT_SEEDS.iter().map(|seed| seed.localize(catalog)).collect()
}

const fn skill(name: &'static str, category: SkillCategory, icon: &'static str) -> Skill {
    Skill {
        name,
        category,
        icon,
    }
}

pub const SKILLS: [Skill; 21] = [
    skill("React", SkillCategory::Frontend, "⚛"),
    skill("TypeScript", SkillCategory::Frontend, "TS"),
    skill("Next.js", SkillCategory::Frontend, "▲"),
    skill("CSS/SCSS", SkillCategory::Frontend, "#"),
    skill("Tailwind CSS", SkillCategory::Frontend, "≋"),
    skill("React Native", SkillCategory::Frontend, "📱"),
    skill("Node.js", SkillCategory::Backend, "⬢"),
    skill("Go", SkillCategory::Backend, "Go"),
    skill("Rust", SkillCategory::Backend, "⚙"),
    skill("GraphQL", SkillCategory::Backend, "◈"),
    skill("NestJS", SkillCategory::Backend, "◆"),
    skill("PostgreSQL", SkillCategory::Backend, "🐘"),
    skill("Redis", SkillCategory::Backend, "◧"),
    skill("AWS", SkillCategory::Devops, "☁"),
    skill("Terraform", SkillCategory::Devops, "◩"),
    skill("Kubernetes", SkillCategory::Devops, "☸"),
    skill("Docker", SkillCategory::Devops, "🐳"),
    skill("GitHub Actions", SkillCategory::Devops, "▶"),
    skill("System Design", SkillCategory::Other, "◎"),
    skill("Team Leadership", SkillCategory::Other, "★"),
    skill("Agile/Scrum", SkillCategory::Other, "↻"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{tag_preview, CARD_TAG_LIMIT};
    use crate::i18n::{Locale, SUPPORTED_LOCALES};

    #[test]
    fn nav_links_cover_every_section_anchor() {
        let ids: Vec<&str> = NAV_LINKS.iter().map(NavLink::section_id).collect();
        assert_eq!(ids, ["about", "skills", "projects", "contact"]);
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECT_SEEDS.iter().map(|seed| seed.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECT_SEEDS.len());
    }

    #[test]
    fn every_project_is_translated_in_every_locale() {
        for locale in SUPPORTED_LOCALES {
            let catalog = Catalog::from_json(
                locale,
                match locale {
                    Locale::En => include_str!("../locales/en.json"),
                    Locale::Fr => include_str!("../locales/fr.json"),
                },
            )
            .expect("catalog parses");

            for seed in &PROJECT_SEEDS {
                assert!(catalog.contains(&seed.description_key()), "{}", seed.slug);
                assert!(catalog.contains(&seed.details_key()), "{}", seed.slug);
            }
        }
    }

    #[test]
    fn localized_projects_keep_their_order_and_technologies() {
        let catalog = Catalog::bundled(Locale::Fr).expect("catalog parses");
        let projects = projects(&catalog);

        assert_eq!(projects.len(), PROJECT_SEEDS.len());
        assert_eq!(projects[0].title, "Harbor Ledger");
        assert_eq!(projects[0].technologies.len(), 6);
        assert!(projects[0].description.starts_with("Rapprochement"));
    }

    #[test]
    fn fixture_exercises_both_card_layouts() {
        let catalog = Catalog::bundled(Locale::En).expect("catalog parses");
        let projects = projects(&catalog);

        assert!(projects
            .iter()
            .any(|project| tag_preview(&project.technologies, CARD_TAG_LIMIT).hidden > 0));
        assert!(projects
            .iter()
            .any(|project| tag_preview(&project.technologies, CARD_TAG_LIMIT).hidden == 0));
    }

    #[test]
    fn client_is_carried_into_the_localized_project() {
        let catalog = Catalog::bundled(Locale::En).expect("catalog parses");
        for (seed, project) in PROJECT_SEEDS.iter().zip(projects(&catalog)) {
            assert_eq!(project.client.as_deref(), seed.client, "{}", seed.slug);
        }
        assert!(PROJECT_SEEDS.iter().any(|seed| seed.client.is_some()));
        assert!(PROJECT_SEEDS.iter().any(|seed| seed.client.is_none()));
    }

    #[test]
    fn category_and_nav_labels_exist_in_catalog() {
        let catalog = Catalog::bundled(Locale::En).expect("catalog parses");
        for link in &NAV_LINKS {
            assert!(catalog.contains(link.label_key), "{}", link.label_key);
        }
        for style in &crate::skills::CATEGORY_STYLES {
            assert!(catalog.contains(style.label_key), "{}", style.label_key);
        }
    }
}
