use crate::content::{Anchor, NavItem};

/// Visibility of the mobile navigation panel.
///
/// Only the toggle control and a link selection ever write to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Closes the menu and hands back the section to scroll to.
    pub fn select(&mut self, item: &NavItem) -> Anchor {
        self.close();
        item.anchor
    }

    /// Glyph for the toggle control: a cross while open, a hamburger otherwise
    pub fn glyph(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Fechar menu"
        } else {
            "Abrir menu"
        }
    }
}

/// Smoothly scrolls the section named by `anchor` into view.
#[cfg(feature = "hydrate")]
pub fn scroll_to_anchor(anchor: Anchor) {
    let Some(el) = leptos::prelude::document().get_element_by_id(anchor.id()) else {
        log::warn!("no element for anchor #{anchor}");
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[cfg(feature = "hydrate")]
pub fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    leptos::prelude::window().scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    #[test]
    fn test_menu_starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.glyph(), "☰");
    }

    #[test]
    fn test_toggle_parity() {
        for start_open in [false, true] {
            for n in 0..7 {
                let mut menu = MenuState::default();
                if start_open {
                    menu.toggle();
                }
                for _ in 0..n {
                    menu.toggle();
                }
                let flipped = n % 2 == 1;
                assert_eq!(menu.is_open(), start_open != flipped, "{n} toggles");
            }
        }
    }

    #[test]
    fn test_select_closes_and_targets_anchor() {
        for item in NAV_ITEMS {
            let mut menu = MenuState::default();
            menu.toggle();
            assert!(menu.is_open());

            let anchor = menu.select(item);
            assert!(!menu.is_open());
            assert_eq!(anchor, item.anchor);
            assert_eq!(format!("#{}", anchor.id()), item.anchor.href());
        }
    }

    #[test]
    fn test_select_on_closed_menu_stays_closed() {
        let mut menu = MenuState::default();
        let anchor = menu.select(&NAV_ITEMS[2]);
        assert!(!menu.is_open());
        assert_eq!(anchor, Anchor::Projects);
    }

    #[test]
    fn test_glyph_follows_state() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert_eq!(menu.glyph(), "✕");
        assert_eq!(menu.toggle_label(), "Fechar menu");
    }
}
