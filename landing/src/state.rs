//! Navbar view state.
//!
//! Two transient flags drive the fixed navbar: whether the page has scrolled
//! past the threshold, and whether the mobile menu overlay is open. Both
//! start `false` on every fresh load and are never persisted.

/// Vertical offset (CSS pixels) past which the navbar drops its transparent
/// treatment. Strictly greater-than; no hysteresis.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn past_threshold(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Transient state cell owned by the `Nav` component.
///
/// `scrolled_past_threshold` is written only by the scroll observer;
/// `menu_open` only by explicit user action (menu button, link activation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled_past_threshold: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Recompute the scroll flag from the current vertical offset.
    pub fn with_scroll_offset(self, offset_y: f64) -> Self {
        Self {
            scrolled_past_threshold: past_threshold(offset_y),
            ..self
        }
    }

    pub fn menu_opened(self) -> Self {
        Self {
            menu_open: true,
            ..self
        }
    }

    /// Navigation links apply this on activation, so the overlay never
    /// outlives a jump to a section.
    pub fn menu_closed(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn menu_toggled(self) -> Self {
        if self.menu_open {
            self.menu_closed()
        } else {
            self.menu_opened()
        }
    }

    /// The one cross-cutting state-to-presentation rule on the page.
    pub fn navbar_mode(self) -> NavbarMode {
        if self.scrolled_past_threshold || self.menu_open {
            NavbarMode::Opaque
        } else {
            NavbarMode::Transparent
        }
    }
}

/// Visual treatment of the fixed navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarMode {
    Transparent,
    Opaque,
}

impl NavbarMode {
    /// Class list for the `<nav>` element. CSS owns the transition.
    pub fn nav_class(self) -> &'static str {
        match self {
            NavbarMode::Transparent => "nav",
            NavbarMode::Opaque => "nav nav-solid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_is_strictly_greater_than() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(10.0));
        assert!(!past_threshold(50.0));
        assert!(past_threshold(50.5));
        assert!(past_threshold(120.0));
    }

    #[test]
    fn scroll_flag_tracks_offset_without_hysteresis() {
        let state = NavState::default();
        let state = state.with_scroll_offset(120.0);
        assert!(state.scrolled_past_threshold);
        // Scrolling back up clears the flag immediately.
        let state = state.with_scroll_offset(10.0);
        assert!(!state.scrolled_past_threshold);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let closed = NavState::default();
        assert_eq!(closed.menu_toggled().menu_toggled(), closed);

        let open = NavState::default().menu_opened();
        assert_eq!(open.menu_toggled().menu_toggled(), open);
    }

    #[test]
    fn link_activation_closes_menu() {
        let state = NavState::default().menu_opened();
        assert!(state.menu_open);
        assert!(!state.menu_closed().menu_open);
        // Closing an already-closed menu is a no-op.
        assert!(!NavState::default().menu_closed().menu_open);
    }

    #[test]
    fn menu_reducers_leave_scroll_flag_alone() {
        let state = NavState::default().with_scroll_offset(200.0);
        assert!(state.menu_opened().scrolled_past_threshold);
        assert!(state.menu_toggled().scrolled_past_threshold);
        assert!(state.menu_closed().scrolled_past_threshold);
    }

    #[test]
    fn navbar_mode_truth_table() {
        for (scrolled, menu_open, expected) in [
            (false, false, NavbarMode::Transparent),
            (true, false, NavbarMode::Opaque),
            (false, true, NavbarMode::Opaque),
            (true, true, NavbarMode::Opaque),
        ] {
            let state = NavState {
                scrolled_past_threshold: scrolled,
                menu_open,
            };
            assert_eq!(state.navbar_mode(), expected, "scrolled={scrolled} menu_open={menu_open}");
        }
    }

    #[test]
    fn scroll_and_menu_scenario() {
        // Initial load, offset 0: transparent, menu closed.
        let state = NavState::default();
        assert_eq!(state.navbar_mode(), NavbarMode::Transparent);
        assert!(!state.menu_open);

        // Scroll to 120: opaque.
        let state = state.with_scroll_offset(120.0);
        assert_eq!(state.navbar_mode(), NavbarMode::Opaque);

        // Back to 10: transparent again, menu still closed.
        let state = state.with_scroll_offset(10.0);
        assert_eq!(state.navbar_mode(), NavbarMode::Transparent);
        assert!(!state.menu_open);

        // Open the menu: opaque regardless of offset.
        let state = state.menu_opened();
        assert_eq!(state.navbar_mode(), NavbarMode::Opaque);

        // Close at offset 10: transparent.
        let state = state.menu_closed();
        assert_eq!(state.navbar_mode(), NavbarMode::Transparent);
    }
}
