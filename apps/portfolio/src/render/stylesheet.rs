//! `site.css`, generated from the nav breakpoint and the motion tables so the
//! stylesheet and the Rust state machines cannot drift apart.

use askama::Template;

use crate::render::motion::{Interaction, InteractionPhase, Motion};

#[derive(Debug, Clone)]
pub struct RevealRule {
    pub class: &'static str,
    pub initial: String,
}

#[derive(Debug, Clone)]
pub struct InteractionRule {
    pub class: &'static str,
    pub transition: &'static str,
    pub hovered: String,
    pub pressed: String,
}

#[derive(Template)]
#[template(path = "site.css", escape = "none")]
pub struct StylesheetTemplate {
    pub breakpoint_px: u32,
    /// Largest width still served the hamburger menu.
    pub below_breakpoint_px: String,
    pub reveal_duration_ms: u32,
    pub reveals: Vec<RevealRule>,
    pub interactions: Vec<InteractionRule>,
}

pub fn build_stylesheet(nav_breakpoint_px: u32) -> StylesheetTemplate {
    let reveals = Motion::ALL
        .iter()
        .map(|motion| RevealRule {
            class: motion.class(),
            initial: motion.spec().initial.css(),
        })
        .collect();

    let interactions = Interaction::ALL
        .iter()
        .map(|interaction| InteractionRule {
            class: interaction.class(),
            transition: interaction.transition(),
            hovered: interaction
                .visual(InteractionPhase::Hovered)
                .transform_css(),
            pressed: interaction
                .visual(InteractionPhase::Pressed)
                .transform_css(),
        })
        .collect();

    StylesheetTemplate {
        breakpoint_px: nav_breakpoint_px,
        below_breakpoint_px: format!("{}.98", nav_breakpoint_px.saturating_sub(1)),
        reveal_duration_ms: Motion::Fade.spec().duration_ms,
        reveals,
        interactions,
    }
}
