/// Open/closed state of the mobile menu and the disclosure panel.
/// The two flags never influence each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub menu_open: bool,
    pub disclosure_open: bool,
}

impl NavigationState {
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn toggle_disclosure(self) -> Self {
        Self {
            disclosure_open: !self.disclosure_open,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggling_twice_restores_state() {
        let states = [
            NavigationState::default(),
            NavigationState { menu_open: true, disclosure_open: false },
            NavigationState { menu_open: false, disclosure_open: true },
            NavigationState { menu_open: true, disclosure_open: true },
        ];
        for state in states {
            assert_eq!(state.toggle_menu().toggle_menu(), state);
            assert_eq!(state.toggle_disclosure().toggle_disclosure(), state);
        }
    }

    #[test]
    fn toggles_are_independent() {
        let state = NavigationState::default().toggle_disclosure();
        let opened = state.toggle_menu();
        assert!(opened.menu_open);
        assert!(opened.disclosure_open);

        let closed = opened.close_menu();
        assert!(!closed.menu_open);
        assert!(closed.disclosure_open);
    }

    #[test]
    fn closing_a_closed_menu_is_a_no_op() {
        let state = NavigationState::default();
        assert_eq!(state.close_menu(), state);
    }
}
