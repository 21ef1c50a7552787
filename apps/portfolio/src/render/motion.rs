//! Viewport-triggered and pointer-driven animation state.
#![allow(dead_code)]
//!
//! # Reveal (fire-once)
//! `Unseen -> Entering -> Settled`. The first visibility-enter starts the
//! transition; every later visibility signal is ignored. An element that is never
//! observed stays `Unseen` and keeps its initial visual state.
//!
//! # Interaction (continuous)
//! `Idle <-> Hovered <-> Pressed`. Bound to pointer state, reverts as soon as the
//! pointer is released or leaves. No terminal state.
//!
//! The easing engine itself lives in the browser: these types decide *which*
//! visual state an element targets, the stylesheet tells the browser how to get there.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Visual states
// ────────────────────────────────────────────────────────────────────────────

/// Opacity plus a 2D offset and a uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub opacity: f32,
    pub x_px: f32,
    pub y_px: f32,
    pub scale: f32,
}

impl VisualState {
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        x_px: 0.0,
        y_px: 0.0,
        scale: 1.0,
    };

    pub const fn hidden_at(x_px: f32, y_px: f32) -> Self {
        VisualState {
            opacity: 0.0,
            x_px,
            y_px,
            scale: 1.0,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x_px, self.y_px, self.scale
        )
    }

    pub fn css(&self) -> String {
        format!("opacity: {}; transform: {}", self.opacity, self.transform_css())
    }
}

/// Initial and resting states for an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionSpec {
    pub initial: VisualState,
    pub resting: VisualState,
    pub duration_ms: u32,
}

const REVEAL_DURATION_MS: u32 = 500;

/// The entrance animations used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Motion {
    /// Fade only. Hero text.
    Fade,
    /// Fade in from 20px to the left. Timelines and the owner name.
    SlideFromLeft,
    /// Fade in from 20px below. Project cards and hero roles.
    Rise,
    /// Fade in from 20px above. Inline header links.
    Drop,
}

impl Motion {
    pub const ALL: [Motion; 4] = [Motion::Fade, Motion::SlideFromLeft, Motion::Rise, Motion::Drop];

    pub fn spec(&self) -> MotionSpec {
        let initial = match self {
            Motion::Fade => VisualState::hidden_at(0.0, 0.0),
            Motion::SlideFromLeft => VisualState::hidden_at(-20.0, 0.0),
            Motion::Rise => VisualState::hidden_at(0.0, 20.0),
            Motion::Drop => VisualState::hidden_at(0.0, -20.0),
        };
        MotionSpec {
            initial,
            resting: VisualState::RESTING,
            duration_ms: REVEAL_DURATION_MS,
        }
    }

    /// Stylesheet class carrying this motion's initial state.
    pub fn class(&self) -> &'static str {
        match self {
            Motion::Fade => "reveal-fade",
            Motion::SlideFromLeft => "reveal-slide",
            Motion::Rise => "reveal-rise",
            Motion::Drop => "reveal-drop",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reveal state machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealPhase {
    Unseen,
    Entering,
    Settled,
}

/// A fire-once entrance animation bound to one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reveal {
    motion: Motion,
    delay_ms: u32,
    phase: RevealPhase,
}

impl Reveal {
    pub fn new(motion: Motion, delay_ms: u32) -> Self {
        Reveal {
            motion,
            delay_ms,
            phase: RevealPhase::Unseen,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Feeds a visibility signal. Returns `true` only when this call started the
    /// entrance transition, which happens at most once per element.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && self.phase == RevealPhase::Unseen {
            self.phase = RevealPhase::Entering;
            return true;
        }
        false
    }

    /// Marks the running transition as finished.
    pub fn finish(&mut self) {
        if self.phase == RevealPhase::Entering {
            self.phase = RevealPhase::Settled;
        }
    }

    /// The visual state the element currently targets.
    pub fn target(&self) -> VisualState {
        let spec = self.motion.spec();
        match self.phase {
            RevealPhase::Unseen => spec.initial,
            RevealPhase::Entering | RevealPhase::Settled => spec.resting,
        }
    }

    /// Class list for the element: the reveal marker plus the motion class.
    /// `site.js` applies the same two markers client-side.
    pub fn classes(&self) -> String {
        match self.phase {
            RevealPhase::Unseen => format!("reveal {}", self.motion.class()),
            RevealPhase::Entering => format!("reveal {} is-revealed", self.motion.class()),
            RevealPhase::Settled => {
                format!("reveal {} is-revealed is-settled", self.motion.class())
            }
        }
    }

    /// Inline style carrying the stagger delay.
    pub fn delay_style(&self) -> String {
        format!("transition-delay: {}ms", self.delay_ms)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interaction state machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InteractionPhase {
    Idle,
    Hovered,
    Pressed,
}

impl InteractionPhase {
    pub fn on(self, event: PointerEvent) -> InteractionPhase {
        use InteractionPhase::*;
        match (self, event) {
            (Idle, PointerEvent::Enter) => Hovered,
            // Touch taps press without a preceding hover.
            (Idle, PointerEvent::Press) | (Hovered, PointerEvent::Press) => Pressed,
            (Hovered, PointerEvent::Leave) | (Pressed, PointerEvent::Leave) => Idle,
            (Pressed, PointerEvent::Release) => Hovered,
            (phase, _) => phase,
        }
    }
}

/// Hover and tap targets for a pointer-driven element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interaction {
    /// Social icons: scale 1.1 on hover, 0.95 on tap.
    Icon,
    /// Call-to-action buttons: scale 1.05 on hover, 0.95 on tap.
    Button,
    /// Project cards: lift 5px on hover.
    Lift,
}

impl Interaction {
    pub const ALL: [Interaction; 3] = [Interaction::Icon, Interaction::Button, Interaction::Lift];

    pub fn visual(&self, phase: InteractionPhase) -> VisualState {
        let base = VisualState::RESTING;
        match (self, phase) {
            (_, InteractionPhase::Idle) => base,
            (Interaction::Icon, InteractionPhase::Hovered) => VisualState { scale: 1.1, ..base },
            (Interaction::Button, InteractionPhase::Hovered) => VisualState { scale: 1.05, ..base },
            (Interaction::Icon | Interaction::Button, InteractionPhase::Pressed) => {
                VisualState { scale: 0.95, ..base }
            }
            (Interaction::Lift, InteractionPhase::Hovered | InteractionPhase::Pressed) => {
                VisualState { y_px: -5.0, ..base }
            }
        }
    }

    /// Transition list for the element once no reveal is running. Carries the
    /// colour fades of the styled element along with the transform.
    pub fn transition(&self) -> &'static str {
        match self {
            Interaction::Icon => "color 200ms, transform 150ms ease-out",
            Interaction::Button => "background 200ms, color 200ms, transform 150ms ease-out",
            Interaction::Lift => "transform 150ms ease-out",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Interaction::Icon => "press-icon",
            Interaction::Button => "press-button",
            Interaction::Lift => "hover-lift",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reveal_starts_unseen_with_initial_state() {
        let reveal = Reveal::new(Motion::SlideFromLeft, 200);
        assert_eq!(reveal.phase(), RevealPhase::Unseen);
        assert_eq!(reveal.target().opacity, 0.0);
        assert_eq!(reveal.target().x_px, -20.0);
    }

    #[test]
    fn test_two_visibility_enters_yield_one_transition() {
        let mut reveal = Reveal::new(Motion::Rise, 0);
        assert!(reveal.observe(true));
        assert!(!reveal.observe(true));
        assert_eq!(reveal.phase(), RevealPhase::Entering);
    }

    #[test]
    fn test_settled_never_retriggers_after_leaving_viewport() {
        let mut reveal = Reveal::new(Motion::Rise, 0);
        reveal.observe(true);
        reveal.finish();
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert_eq!(reveal.phase(), RevealPhase::Settled);
        assert_eq!(reveal.target(), VisualState::RESTING);
    }

    #[test]
    fn test_never_visible_stays_unseen() {
        let mut reveal = Reveal::new(Motion::Fade, 0);
        reveal.observe(false);
        reveal.finish();
        assert_eq!(reveal.phase(), RevealPhase::Unseen);
    }

    #[test]
    fn test_reveal_classes_follow_phase() {
        let mut reveal = Reveal::new(Motion::Drop, 100);
        assert_eq!(reveal.classes(), "reveal reveal-drop");
        reveal.observe(true);
        assert_eq!(reveal.classes(), "reveal reveal-drop is-revealed");
        assert_eq!(reveal.delay_style(), "transition-delay: 100ms");
        reveal.finish();
        assert_eq!(reveal.classes(), "reveal reveal-drop is-revealed is-settled");
    }

    #[test]
    fn test_visual_state_css() {
        let state = VisualState::hidden_at(-20.0, 0.0);
        assert_eq!(
            state.css(),
            "opacity: 0; transform: translate(-20px, 0px) scale(1)"
        );
    }

    #[test]
    fn test_hover_press_release_cycle() {
        let phase = InteractionPhase::Idle
            .on(PointerEvent::Enter)
            .on(PointerEvent::Press);
        assert_eq!(phase, InteractionPhase::Pressed);
        let phase = phase.on(PointerEvent::Release);
        assert_eq!(phase, InteractionPhase::Hovered);
        assert_eq!(phase.on(PointerEvent::Leave), InteractionPhase::Idle);
    }

    #[test]
    fn test_leave_while_pressed_reverts_to_idle() {
        let phase = InteractionPhase::Pressed.on(PointerEvent::Leave);
        assert_eq!(phase, InteractionPhase::Idle);
        assert_eq!(Interaction::Icon.visual(phase), VisualState::RESTING);
    }

    #[test]
    fn test_interaction_targets() {
        assert_eq!(Interaction::Icon.visual(InteractionPhase::Hovered).scale, 1.1);
        assert_eq!(Interaction::Button.visual(InteractionPhase::Hovered).scale, 1.05);
        assert_eq!(Interaction::Button.visual(InteractionPhase::Pressed).scale, 0.95);
        assert_eq!(Interaction::Lift.visual(InteractionPhase::Hovered).y_px, -5.0);
    }

    fn visibility_events() -> impl Strategy<Value = Vec<bool>> {
        proptest::collection::vec(any::<bool>(), 0..32)
    }

    proptest! {
        #[test]
        fn prop_reveal_fires_at_most_once(events in visibility_events(), finish_after in 0usize..32) {
            let mut reveal = Reveal::new(Motion::SlideFromLeft, 0);
            let mut fired = 0;
            for (i, visible) in events.iter().enumerate() {
                if reveal.observe(*visible) {
                    fired += 1;
                }
                if i == finish_after {
                    reveal.finish();
                }
            }
            prop_assert!(fired <= 1);
            prop_assert_eq!(fired == 1, events.iter().any(|v| *v));
        }
    }
}
