//! Card stack presenter for certifications.
#![allow(dead_code)]
//!
//! Only the top card takes gestures. A swipe that crosses the distance or the
//! velocity threshold advances the stack; there is no way back. Past the last
//! card the stack stops: further swipes leave the last card on top.

use serde::{Deserialize, Serialize};

use crate::models::CertificationEntry;

/// Cards drawn at once, top card included.
pub const MAX_VISIBLE: usize = 4;
const DEPTH_OFFSET_PX: u32 = 8;
const DEPTH_ROTATE_DEG: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeThreshold {
    pub distance_px: f32,
    /// Pixels per millisecond.
    pub velocity: f32,
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        SwipeThreshold {
            distance_px: 50.0,
            velocity: 0.5,
        }
    }
}

/// A completed drag on the top card. Direction does not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub dx: f32,
    pub velocity: f32,
}

impl SwipeThreshold {
    pub fn is_crossed_by(&self, swipe: &Swipe) -> bool {
        swipe.dx.abs() >= self.distance_px || swipe.velocity.abs() >= self.velocity
    }
}

/// A card as drawn: depth 0 is the top card.
#[derive(Debug, Clone)]
pub struct StackedCard<'a> {
    pub depth: usize,
    pub entry: &'a CertificationEntry,
}

impl StackedCard<'_> {
    pub fn is_interactive(&self) -> bool {
        self.depth == 0
    }

    pub fn style(&self) -> String {
        let depth = self.depth as u32;
        format!(
            "z-index: {}; transform: translateX({}px) rotate({}deg)",
            MAX_VISIBLE as u32 - depth,
            depth * DEPTH_OFFSET_PX,
            depth * DEPTH_ROTATE_DEG
        )
    }
}

#[derive(Debug, Clone)]
pub struct CardStack<'a> {
    cards: &'a [CertificationEntry],
    top: usize,
}

impl<'a> CardStack<'a> {
    pub fn new(cards: &'a [CertificationEntry]) -> Self {
        CardStack { cards, top: 0 }
    }

    /// Stack positioned at `top`, clamped to the last card.
    pub fn at(cards: &'a [CertificationEntry], top: usize) -> Self {
        CardStack {
            cards,
            top: top.min(cards.len().saturating_sub(1)),
        }
    }

    pub fn top_index(&self) -> usize {
        self.top
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&'a CertificationEntry> {
        self.cards.get(self.top)
    }

    pub fn has_next(&self) -> bool {
        self.top + 1 < self.cards.len()
    }

    /// Moves the next card to the top. Returns `false` at the end of the stack.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.top += 1;
            true
        } else {
            false
        }
    }

    /// Advances if the gesture crosses the threshold.
    pub fn swipe(&mut self, swipe: &Swipe, threshold: &SwipeThreshold) -> bool {
        threshold.is_crossed_by(swipe) && self.advance()
    }

    /// The top card and up to `MAX_VISIBLE - 1` cards behind it, front first.
    pub fn visible(&self) -> Vec<StackedCard<'a>> {
        self.cards
            .iter()
            .skip(self.top)
            .take(MAX_VISIBLE)
            .enumerate()
            .map(|(depth, entry)| StackedCard { depth, entry })
            .collect()
    }
}
