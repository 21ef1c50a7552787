//! Page assembly: resolves the request into UI state and builds the view models
//! the `page.html` template walks.

use askama::Template;

use crate::models::{Catalog, SectionKind, SocialLink};
use crate::render::card_stack::{CardStack, StackedCard, Swipe, SwipeThreshold};
use crate::render::motion::{Interaction, Motion, Reveal};
use crate::render::nav::{InlineLink, MenuIcon, MenuState, NavigationController};
use crate::render::section::{
    render_projects, render_timeline, OutboundLink, ProjectCard, RenderedSection, TimelineCard,
};

// ────────────────────────────────────────────────────────────────────────────
// Request state
// ────────────────────────────────────────────────────────────────────────────

/// Raw query parameters of `GET /`. Parsed leniently: bad values fall back to
/// defaults and a repeated key keeps its first value.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub menu: Option<String>,
    pub card: Option<String>,
    /// Horizontal travel of a finished drag on the top card, in px.
    pub dx: Option<String>,
    /// Release velocity of that drag, in px/ms.
    pub v: Option<String>,
}

impl PageQuery {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = PageQuery::default();
        let Some(raw) = raw else {
            return query;
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match &*key {
                "menu" => &mut query.menu,
                "card" => &mut query.card,
                "dx" => &mut query.dx,
                "v" => &mut query.v,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }

    pub fn swipe(&self) -> Option<Swipe> {
        let dx = self.dx.as_deref()?.trim().parse::<f32>().ok()?;
        let velocity = self
            .v
            .as_deref()
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.0);
        Some(Swipe { dx, velocity })
    }

    fn card(&self) -> usize {
        self.card
            .as_deref()
            .and_then(|c| c.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }
}

/// Everything about the page that varies per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLocation {
    pub menu: MenuState,
    pub card: usize,
}

impl PageLocation {
    /// Resolves a query against the catalog. A reported swipe is applied to the
    /// card stack here, so the threshold decision stays on the server.
    pub fn resolve(query: &PageQuery, catalog: &Catalog, threshold: &SwipeThreshold) -> Self {
        let mut stack = CardStack::at(&catalog.certifications, query.card());
        if let Some(swipe) = query.swipe() {
            stack.swipe(&swipe, threshold);
        }

        PageLocation {
            menu: MenuState::from_param(query.menu.as_deref()),
            card: stack.top_index(),
        }
    }

    /// Link to this location. Default values are left out of the query string.
    pub fn href(&self, fragment: Option<&str>) -> String {
        let mut params = Vec::new();
        if self.menu.is_open {
            params.push("menu=open".to_string());
        }
        if self.card > 0 {
            params.push(format!("card={}", self.card));
        }

        let mut href = "/".to_string();
        if !params.is_empty() {
            href.push('?');
            href.push_str(&params.join("&"));
        }
        if let Some(fragment) = fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SectionFrame {
    pub id: &'static str,
    pub heading: &'static str,
}

impl From<SectionKind> for SectionFrame {
    fn from(kind: SectionKind) -> Self {
        SectionFrame {
            id: kind.anchor_id(),
            heading: kind.heading(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frames {
    pub hero: SectionFrame,
    pub education: SectionFrame,
    pub experience: SectionFrame,
    pub projects: SectionFrame,
    pub certifications: SectionFrame,
    pub contact: SectionFrame,
}

impl Frames {
    fn new() -> Self {
        Frames {
            hero: SectionKind::Hero.into(),
            education: SectionKind::Education.into(),
            experience: SectionKind::Experience.into(),
            projects: SectionKind::Projects.into(),
            certifications: SectionKind::Certifications.into(),
            contact: SectionKind::Contact.into(),
        }
    }
}

#[derive(Debug)]
pub struct HeaderView<'a> {
    pub name_reveal: Reveal,
    pub inline: Vec<InlineLink<'a>>,
    pub toggle_href: String,
    pub toggle_icon: MenuIcon,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub struct OverlayLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct SocialView {
    pub label: &'static str,
    pub link: OutboundLink,
    pub class: &'static str,
}

impl From<&SocialLink> for SocialView {
    fn from(social: &SocialLink) -> Self {
        SocialView {
            label: social.kind.label(),
            link: OutboundLink::external(&social.href),
            class: Interaction::Icon.class(),
        }
    }
}

#[derive(Debug)]
pub struct HeroView {
    pub greeting: String,
    pub greeting_reveal: Reveal,
    pub roles_reveal: Reveal,
    pub socials_reveal: Reveal,
    pub roles: Vec<String>,
    pub socials: Vec<SocialView>,
}

#[derive(Debug)]
pub struct CardStackView<'a> {
    pub cards: Vec<StackedCard<'a>>,
    /// `"2 / 5"`; empty when there are no cards.
    pub position: String,
    pub next_href: Option<String>,
    /// Current location; the drag script appends `dx` and `v` to it.
    pub swipe_href: String,
    pub threshold: SwipeThreshold,
}

#[derive(Debug)]
pub struct ContactView {
    pub blurb: String,
    pub link: OutboundLink,
    pub class: &'static str,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub owner: &'a str,
    pub frames: Frames,
    pub header: HeaderView<'a>,
    pub overlay: Option<Vec<OverlayLink>>,
    pub hero: HeroView,
    pub education: RenderedSection<TimelineCard>,
    pub experience: RenderedSection<TimelineCard>,
    pub projects: RenderedSection<ProjectCard>,
    pub certifications: CardStackView<'a>,
    pub contact: ContactView,
}

/// Builds the page for one location. Pure: same catalog and location, same page.
pub fn build_page<'a>(
    catalog: &'a Catalog,
    location: PageLocation,
    threshold: SwipeThreshold,
) -> PageTemplate<'a> {
    let nav = NavigationController::new(&catalog.nav, location.menu);

    // Links carry the state the controller would be in after the interaction.
    let toggle_target = {
        let mut probe = NavigationController::new(&catalog.nav, location.menu);
        probe.toggle();
        PageLocation {
            menu: probe.state(),
            ..location
        }
    };

    let header = HeaderView {
        name_reveal: Reveal::new(Motion::SlideFromLeft, 0),
        inline: nav.inline(),
        toggle_href: toggle_target.href(None),
        toggle_icon: nav.icon(),
        menu_open: nav.is_open(),
    };

    let overlay = nav.overlay().map(|items| {
        items
            .iter()
            .map(|item| {
                let mut probe = NavigationController::new(&catalog.nav, location.menu);
                probe.select(&item.anchor_id);
                let after_select = PageLocation {
                    menu: probe.state(),
                    ..location
                };
                OverlayLink {
                    label: item.label.clone(),
                    href: after_select.href(Some(item.anchor_id.as_str())),
                }
            })
            .collect()
    });

    let hero = HeroView {
        greeting: catalog.profile.greeting.clone(),
        greeting_reveal: Reveal::new(Motion::Fade, 200),
        roles_reveal: Reveal::new(Motion::Rise, 300),
        socials_reveal: Reveal::new(Motion::Fade, 500),
        roles: catalog.profile.roles.clone(),
        socials: catalog.socials.iter().map(SocialView::from).collect(),
    };

    let stack = CardStack::at(&catalog.certifications, location.card);
    let next_href = stack.has_next().then(|| {
        PageLocation {
            card: stack.top_index() + 1,
            ..location
        }
        .href(Some(SectionKind::Certifications.anchor_id()))
    });
    let position = if stack.is_empty() {
        String::new()
    } else {
        format!("{} / {}", stack.top_index() + 1, stack.len())
    };
    let certifications = CardStackView {
        cards: stack.visible(),
        position,
        next_href,
        swipe_href: location.href(None),
        threshold,
    };

    let contact = ContactView {
        blurb: catalog.profile.contact_blurb.clone(),
        link: OutboundLink::external(&format!("mailto:{}", catalog.profile.contact_email)),
        class: Interaction::Button.class(),
    };

    PageTemplate {
        owner: &catalog.profile.name,
        frames: Frames::new(),
        header,
        overlay,
        hero,
        education: render_timeline(&catalog.education),
        experience: render_timeline(&catalog.experience),
        projects: render_projects(&catalog.projects),
        certifications,
        contact,
    }
}
