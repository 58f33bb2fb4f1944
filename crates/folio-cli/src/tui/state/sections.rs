//! Page sections following the hero
//!
//! The hero owns the top of the page (`home`). Every other anchor gets an
//! equal share of the region below the hero container.

use folio_core::nav::{resolve, NavItem, NavTarget};

/// Id of the anchor at the very top of the page
pub const HOME_ANCHOR: &str = "home";

/// One titled section in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub top: f64,
}

/// Lay out sections for the in-page anchors of `items` below a hero
/// container ending at `container_bottom`, sharing `trailing_height` pixels
pub fn layout_sections(
    items: &[NavItem],
    container_bottom: f64,
    trailing_height: f64,
) -> Vec<Section> {
    let anchors: Vec<(String, &str)> = items
        .iter()
        .filter_map(|item| match resolve(&item.href) {
            NavTarget::Anchor(id) if id != HOME_ANCHOR => Some((id, item.label.as_str())),
            _ => None,
        })
        .collect();
    let share = if anchors.is_empty() {
        0.0
    } else {
        trailing_height.max(0.0) / anchors.len() as f64
    };

    anchors
        .into_iter()
        .enumerate()
        .map(|(i, (id, label))| Section {
            id,
            label: label.to_string(),
            top: container_bottom + i as f64 * share,
        })
        .collect()
}

/// Document offset of an anchor, if it names the hero or a section
pub fn anchor_offset(sections: &[Section], id: &str) -> Option<f64> {
    if id == HOME_ANCHOR {
        return Some(0.0);
    }
    sections.iter().find(|s| s.id == id).map(|s| s.top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::nav::default_items;

    #[test]
    fn test_sections_share_trailing_region() {
        let sections = layout_sections(&default_items(), 2496.0, 1600.0);
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[0].id, "about");
        assert_eq!(sections[0].top, 2496.0);
        assert_eq!(sections[1].top, 2816.0);
        assert_eq!(sections[4].top, 3776.0);
    }

    #[test]
    fn test_anchor_offsets() {
        let sections = layout_sections(&default_items(), 2496.0, 1600.0);
        assert_eq!(anchor_offset(&sections, "home"), Some(0.0));
        assert_eq!(anchor_offset(&sections, "skills"), Some(2816.0));
        assert_eq!(anchor_offset(&sections, "blog"), None);
    }

    #[test]
    fn test_page_links_get_no_section() {
        let mut items = default_items();
        items.push(NavItem::new("cv", "CV", "/cv.pdf"));
        let sections = layout_sections(&items, 2496.0, 1600.0);
        assert_eq!(sections.len(), 5);
        assert!(sections.iter().all(|s| s.id != "cv"));
    }

    #[test]
    fn test_only_home() {
        let items = vec![NavItem::new("home", "Home", "#home")];
        assert!(layout_sections(&items, 100.0, 500.0).is_empty());
    }
}
