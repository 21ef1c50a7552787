use serde::{Deserialize, Serialize};

/// One timeline item. Education and experience share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub title: String,
    pub subtitle: String,
    pub date_range: String,
    pub location: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Absolute `http(s)` URL or `mailto:` URI.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    pub instructor: String,
}

/// A header link. `anchor_id` must match exactly one section id on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    Github,
    Linkedin,
    Mail,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Mail => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    /// Role titles cycled in the hero.
    pub roles: Vec<String>,
    pub contact_blurb: String,
    pub contact_email: String,
}

/// The page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Education,
    Experience,
    Projects,
    Certifications,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Hero,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Contact,
    ];

    /// Element id the section is rendered with. The hero answers to "about".
    pub fn anchor_id(&self) -> &'static str {
        match self {
            SectionKind::Hero => "about",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Contact => "contact",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Hero => "About",
            SectionKind::Education => "Education",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Certifications => "Certifications",
            SectionKind::Contact => "Get In Touch",
        }
    }
}

/// Everything the page shows. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub socials: Vec<SocialLink>,
    pub education: Vec<SectionEntry>,
    pub experience: Vec<SectionEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}
