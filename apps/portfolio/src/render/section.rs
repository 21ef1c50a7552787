//! Section renderer: content list in, staggered reveal items out.
#![allow(dead_code)]
//!
//! Display order is authoring order. No filtering, sorting or paging happens here.

use crate::models::{ProjectEntry, SectionEntry};
use crate::render::motion::{Interaction, Motion, Reveal};

/// Delay between consecutive timeline items.
pub const TIMELINE_STAGGER_MS: u32 = 200;
/// Delay between consecutive project cards and header links.
pub const GRID_STAGGER_MS: u32 = 100;

/// `delay = index * step_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(step_ms: u32) -> Self {
        Stagger { step_ms }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.step_ms)
    }
}

/// One entry projected through a template, with its entrance animation.
#[derive(Debug, Clone)]
pub struct RenderedItem<V> {
    pub index: usize,
    pub reveal: Reveal,
    pub view: V,
}

#[derive(Debug, Clone)]
pub struct RenderedSection<V> {
    pub items: Vec<RenderedItem<V>>,
}

impl<V> RenderedSection<V> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Projects every entry through `template`, preserving order, and attaches a
/// fire-once reveal whose delay grows with the item's position.
pub fn render_section<E, V, F>(
    entries: &[E],
    motion: Motion,
    stagger: Stagger,
    template: F,
) -> RenderedSection<V>
where
    F: Fn(&E) -> V,
{
    let items = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| RenderedItem {
            index,
            reveal: Reveal::new(motion, stagger.delay_for(index)),
            view: template(entry),
        })
        .collect();

    RenderedSection { items }
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// A link leaving the page.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundLink {
    pub href: String,
    /// Open in a new browsing context with `rel="noopener noreferrer"`.
    pub new_context: bool,
}

impl OutboundLink {
    /// Web links open in a new context; `mailto:` links hand off to the mail client.
    pub fn external(href: &str) -> Self {
        OutboundLink {
            href: href.to_string(),
            new_context: !href.starts_with("mailto:"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineCard {
    pub title: String,
    pub subtitle: String,
    /// `date | location`, or just the date.
    pub meta: String,
    pub bullets: Vec<String>,
}

pub fn timeline_card(entry: &SectionEntry) -> TimelineCard {
    let meta = match &entry.location {
        Some(location) if !location.trim().is_empty() => {
            format!("{} | {}", entry.date_range, location)
        }
        _ => entry.date_range.clone(),
    };

    TimelineCard {
        title: entry.title.clone(),
        subtitle: entry.subtitle.clone(),
        meta,
        bullets: entry.bullets.clone(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub link: OutboundLink,
    pub hover_class: &'static str,
}

pub fn project_card(entry: &ProjectEntry) -> ProjectCard {
    ProjectCard {
        title: entry.title.clone(),
        description: entry.description.clone(),
        link: OutboundLink::external(&entry.link),
        hover_class: Interaction::Lift.class(),
    }
}

pub fn render_timeline(entries: &[SectionEntry]) -> RenderedSection<TimelineCard> {
    render_section(
        entries,
        Motion::SlideFromLeft,
        Stagger::new(TIMELINE_STAGGER_MS),
        timeline_card,
    )
}

pub fn render_projects(entries: &[ProjectEntry]) -> RenderedSection<ProjectCard> {
    render_section(
        entries,
        Motion::Rise,
        Stagger::new(GRID_STAGGER_MS),
        project_card,
    )
}
