//! Navigation controller: the one piece of UI state on the page.
//!
//! The header button and the overlay both read `MenuState`; only the controller
//! writes it. Wide viewports never consult it: the inline nav is always present
//! and the stylesheet hides whichever rendering does not match the viewport.

use serde::{Deserialize, Serialize};

use crate::models::NavItem;
use crate::render::motion::{Motion, Reveal};
use crate::render::section::{Stagger, GRID_STAGGER_MS};

/// Whether the full-screen mobile menu is open. Starts closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    pub const CLOSED: MenuState = MenuState { is_open: false };
    pub const OPEN: MenuState = MenuState { is_open: true };

    pub fn toggled(self) -> MenuState {
        MenuState {
            is_open: !self.is_open,
        }
    }

    /// Parses the `menu` query value. Anything but `open` means closed.
    pub fn from_param(value: Option<&str>) -> MenuState {
        match value {
            Some(v) if v.eq_ignore_ascii_case("open") => MenuState::OPEN,
            _ => MenuState::CLOSED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Hamburger, shown while closed.
    Menu,
    /// Cross, shown while open.
    Close,
}

impl MenuIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Menu => "☰",
            MenuIcon::Close => "✕",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuIcon::Menu => "Open menu",
            MenuIcon::Close => "Close menu",
        }
    }
}

/// A header link that is always visible on wide viewports.
#[derive(Debug, Clone)]
pub struct InlineLink<'a> {
    pub item: &'a NavItem,
    pub reveal: Reveal,
}

#[derive(Debug)]
pub struct NavigationController<'a> {
    items: &'a [NavItem],
    state: MenuState,
}

impl<'a> NavigationController<'a> {
    pub fn new(items: &'a [NavItem], state: MenuState) -> Self {
        NavigationController { items, state }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    /// Selecting an item always dismisses the menu. Returns the item so the
    /// caller can scroll to its anchor.
    pub fn select(&mut self, anchor_id: &str) -> Option<&'a NavItem> {
        self.state = MenuState::CLOSED;
        self.items.iter().find(|item| item.anchor_id == anchor_id)
    }

    pub fn icon(&self) -> MenuIcon {
        if self.state.is_open {
            MenuIcon::Close
        } else {
            MenuIcon::Menu
        }
    }

    /// Overlay items. `None` while closed: the overlay is not mounted at all.
    pub fn overlay(&self) -> Option<&'a [NavItem]> {
        self.state.is_open.then_some(self.items)
    }

    /// Inline header links, each fading down with a 0.1s stagger.
    pub fn inline(&self) -> Vec<InlineLink<'a>> {
        let stagger = Stagger::new(GRID_STAGGER_MS);
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| InlineLink {
                item,
                reveal: Reveal::new(Motion::Drop, stagger.delay_for(i)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::portfolio_catalog;
    use proptest::prelude::*;

    #[test]
    fn test_initial_state_is_closed() {
        let catalog = portfolio_catalog();
        let nav = NavigationController::new(&catalog.nav, MenuState::default());
        assert!(!nav.is_open());
        assert_eq!(nav.icon(), MenuIcon::Menu);
        assert!(nav.overlay().is_none());
    }

    #[test]
    fn test_toggle_opens_overlay_and_switches_icon() {
        let catalog = portfolio_catalog();
        let mut nav = NavigationController::new(&catalog.nav, MenuState::CLOSED);
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.icon(), MenuIcon::Close);
        assert_eq!(nav.overlay().map(|items| items.len()), Some(catalog.nav.len()));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(MenuState::CLOSED.toggled().toggled(), MenuState::CLOSED);
    }

    #[test]
    fn test_select_while_open_closes() {
        let catalog = portfolio_catalog();
        let mut nav = NavigationController::new(&catalog.nav, MenuState::OPEN);
        let item = nav.select("projects");
        assert_eq!(item.map(|i| i.label.as_str()), Some("projects"));
        assert!(!nav.is_open());
        assert!(nav.overlay().is_none());
    }

    #[test]
    fn test_select_unknown_anchor_still_closes() {
        let catalog = portfolio_catalog();
        let mut nav = NavigationController::new(&catalog.nav, MenuState::OPEN);
        assert!(nav.select("nowhere").is_none());
        assert!(!nav.is_open());
    }

    #[test]
    fn test_inline_links_stagger() {
        let catalog = portfolio_catalog();
        let nav = NavigationController::new(&catalog.nav, MenuState::OPEN);
        let delays: Vec<u32> = nav.inline().iter().map(|l| l.reveal.delay_ms()).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn test_menu_param_parsing() {
        assert_eq!(MenuState::from_param(Some("open")), MenuState::OPEN);
        assert_eq!(MenuState::from_param(Some("OPEN")), MenuState::OPEN);
        assert_eq!(MenuState::from_param(Some("closed")), MenuState::CLOSED);
        assert_eq!(MenuState::from_param(Some("banana")), MenuState::CLOSED);
        assert_eq!(MenuState::from_param(None), MenuState::CLOSED);
    }

    proptest! {
        #[test]
        fn prop_toggle_is_an_involution(is_open in any::<bool>()) {
            let state = MenuState { is_open };
            prop_assert_eq!(state.toggled().toggled(), state);
            prop_assert_ne!(state.toggled(), state);
        }
    }
}
