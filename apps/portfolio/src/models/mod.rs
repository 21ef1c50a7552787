pub mod content;

pub use content::{
    Catalog, CertificationEntry, NavItem, Profile, ProjectEntry, SectionEntry, SectionKind,
    SocialKind, SocialLink,
};
