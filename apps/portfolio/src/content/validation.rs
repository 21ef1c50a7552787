use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::{Catalog, SectionEntry, SectionKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingAnchor,
    DuplicateAnchor,
    MalformedLink,
    EmptyBullets,
    BlankField,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthoringIssue {
    pub kind: IssueKind,
    /// Where the problem is, e.g. `projects[2].link`.
    pub location: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogValidationResult {
    pub passed: bool,
    pub issues: Vec<AuthoringIssue>,
}

/// Checks the authoring invariants of a catalog.
///
/// - every nav anchor resolves to exactly one section id
/// - project and social links are absolute `http(s)` URLs or `mailto:` URIs
/// - education and experience entries carry at least one bullet
/// - required text fields are not blank
pub fn validate_catalog(catalog: &Catalog) -> CatalogValidationResult {
    let section_ids: Vec<&str> = SectionKind::ALL.iter().map(|s| s.anchor_id()).collect();
    validate_against_ids(catalog, &section_ids)
}

/// Same as [`validate_catalog`] with an explicit set of element ids.
pub fn validate_against_ids(catalog: &Catalog, element_ids: &[&str]) -> CatalogValidationResult {
    let mut issues = Vec::new();

    for (i, item) in catalog.nav.iter().enumerate() {
        let hits = element_ids
            .iter()
            .filter(|id| **id == item.anchor_id)
            .count();
        match hits {
            1 => {}
            0 => issues.push(AuthoringIssue {
                kind: IssueKind::MissingAnchor,
                location: format!("nav[{i}]"),
                detail: format!("no element with id '{}'", item.anchor_id),
            }),
            n => issues.push(AuthoringIssue {
                kind: IssueKind::DuplicateAnchor,
                location: format!("nav[{i}]"),
                detail: format!("{n} elements share id '{}'", item.anchor_id),
            }),
        }
        if item.label.trim().is_empty() {
            issues.push(blank(format!("nav[{i}].label")));
        }
    }

    for (i, project) in catalog.projects.iter().enumerate() {
        if let Err(detail) = check_link(&project.link) {
            issues.push(AuthoringIssue {
                kind: IssueKind::MalformedLink,
                location: format!("projects[{i}].link"),
                detail,
            });
        }
        if project.title.trim().is_empty() {
            issues.push(blank(format!("projects[{i}].title")));
        }
    }

    for (i, social) in catalog.socials.iter().enumerate() {
        if let Err(detail) = check_link(&social.href) {
            issues.push(AuthoringIssue {
                kind: IssueKind::MalformedLink,
                location: format!("socials[{i}].href"),
                detail,
            });
        }
    }

    check_timeline("education", &catalog.education, &mut issues);
    check_timeline("experience", &catalog.experience, &mut issues);

    for (i, cert) in catalog.certifications.iter().enumerate() {
        if cert.title.trim().is_empty() {
            issues.push(blank(format!("certifications[{i}].title")));
        }
        if cert.organization.trim().is_empty() {
            issues.push(blank(format!("certifications[{i}].organization")));
        }
    }

    if catalog.profile.name.trim().is_empty() {
        issues.push(blank("profile.name".to_string()));
    }

    CatalogValidationResult {
        passed: issues.is_empty(),
        issues,
    }
}

/// Accepts absolute `http`/`https` URLs with a host, and `mailto:` URIs with a recipient.
pub fn check_link(link: &str) -> Result<(), String> {
    let parsed = Url::parse(link).map_err(|e| format!("'{link}' is not an absolute URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(()),
        "mailto" if parsed.path().contains('@') => Ok(()),
        "mailto" => Err(format!("'{link}' has no recipient")),
        scheme => Err(format!("'{link}' uses unsupported scheme '{scheme}'")),
    }
}

fn check_timeline(section: &str, entries: &[SectionEntry], issues: &mut Vec<AuthoringIssue>) {
    for (i, entry) in entries.iter().enumerate() {
        if entry.bullets.is_empty() {
            issues.push(AuthoringIssue {
                kind: IssueKind::EmptyBullets,
                location: format!("{section}[{i}].bullets"),
                detail: format!("'{}' has no bullets", entry.title),
            });
        }
        if entry.title.trim().is_empty() {
            issues.push(blank(format!("{section}[{i}].title")));
        }
        if entry.subtitle.trim().is_empty() {
            issues.push(blank(format!("{section}[{i}].subtitle")));
        }
    }
}

fn blank(location: String) -> AuthoringIssue {
    AuthoringIssue {
        kind: IssueKind::BlankField,
        detail: format!("{location} is blank"),
        location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::portfolio_catalog;
    use crate::models::NavItem;

    #[test]
    fn test_shipped_catalog_passes() {
        let result = validate_catalog(&portfolio_catalog());
        assert!(result.passed, "{:?}", result.issues);
    }

    #[test]
    fn test_every_project_link_is_absolute() {
        for project in portfolio_catalog().projects {
            assert!(check_link(&project.link).is_ok(), "{}", project.link);
        }
    }

    #[test]
    fn test_link_accepts_mailto() {
        assert!(check_link("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_link_rejects_relative_path() {
        assert!(check_link("/projects/churn").is_err());
    }

    #[test]
    fn test_link_rejects_mailto_without_recipient() {
        assert!(check_link("mailto:").is_err());
    }

    #[test]
    fn test_link_rejects_other_schemes() {
        assert!(check_link("ftp://example.com/file").is_err());
    }

    #[test]
    fn test_missing_anchor_reported() {
        let mut catalog = portfolio_catalog();
        catalog.nav.push(NavItem {
            label: "skills".to_string(),
            anchor_id: "skills".to_string(),
        });
        let result = validate_catalog(&catalog);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::MissingAnchor);
    }

    #[test]
    fn test_duplicate_anchor_reported() {
        let catalog = portfolio_catalog();
        let result = validate_against_ids(
            &catalog,
            &["about", "education", "education", "experience", "projects", "contact"],
        );
        assert!(!result.passed);
        assert_eq!(result.issues[0].kind, IssueKind::DuplicateAnchor);
        assert_eq!(result.issues[0].location, "nav[1]");
    }

    #[test]
    fn test_empty_bullets_reported() {
        let mut catalog = portfolio_catalog();
        catalog.experience[1].bullets.clear();
        let result = validate_catalog(&catalog);
        assert!(!result.passed);
        assert_eq!(result.issues[0].kind, IssueKind::EmptyBullets);
        assert_eq!(result.issues[0].location, "experience[1].bullets");
    }

    #[test]
    fn test_malformed_project_link_reported() {
        let mut catalog = portfolio_catalog();
        catalog.projects[0].link = "github.com/someone".to_string();
        let result = validate_catalog(&catalog);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::MalformedLink);
    }
}
