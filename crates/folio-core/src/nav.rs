//! Navigation bar state

use serde::{Deserialize, Serialize};

use crate::constants::nav::SCROLLED_THRESHOLD;

/// One navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Entries shown when no configuration overrides them
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("home", "Home", "#home"),
        NavItem::new("about", "About", "#about"),
        NavItem::new("skills", "Skills", "#skills"),
        NavItem::new("experience", "Experience", "#experience"),
        NavItem::new("projects", "Projects", "#projects"),
        NavItem::new("contact", "Contact", "#contact"),
    ]
}

/// Where activating a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Section on the same page, by id
    Anchor(String),
    /// Another page
    Page(String),
}

/// Classify an href
pub fn resolve(href: &str) -> NavTarget {
    match href.strip_prefix('#') {
        Some(id) => NavTarget::Anchor(id.to_string()),
        None => NavTarget::Page(href.to_string()),
    }
}

/// Scroll-dependent state of the navigation bar
#[derive(Debug, Clone)]
pub struct NavState {
    items: Vec<NavItem>,
    scrolled: bool,
    scrolled_override: Option<bool>,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            scrolled: false,
            scrolled_override: None,
            mobile_menu_open: false,
        }
    }

    /// Let the host decide the scrolled style instead of the scroll offset
    pub fn with_scrolled_override(mut self, scrolled: Option<bool>) -> Self {
        self.scrolled_override = scrolled;
        self
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Update from a scroll offset; true when the scrolled flag flipped
    pub fn update_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Whether the scrolled style applies
    pub fn is_scrolled(&self) -> bool {
        self.scrolled_override.unwrap_or(self.scrolled)
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Follow the item at `index`, closing the mobile menu
    pub fn activate(&mut self, index: usize) -> Option<NavTarget> {
        let target = self.items.get(index).map(|item| resolve(&item.href));
        self.mobile_menu_open = false;
        target
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(default_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        let mut nav = NavState::default();
        assert!(!nav.update_scroll(20.0));
        assert!(!nav.is_scrolled());
        assert!(nav.update_scroll(20.5));
        assert!(nav.is_scrolled());
        assert!(nav.update_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_override_wins() {
        let mut nav = NavState::default().with_scrolled_override(Some(true));
        nav.update_scroll(0.0);
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_resolve_targets() {
        assert_eq!(resolve("#skills"), NavTarget::Anchor("skills".into()));
        assert_eq!(
            resolve("/projects/launch"),
            NavTarget::Page("/projects/launch".into())
        );
    }

    #[test]
    fn test_activate_closes_mobile_menu() {
        let mut nav = NavState::default();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        assert_eq!(nav.activate(1), Some(NavTarget::Anchor("about".into())));
        assert!(!nav.is_mobile_menu_open());

        nav.toggle_mobile_menu();
        assert_eq!(nav.activate(99), None);
        assert!(!nav.is_mobile_menu_open());
    }
}
