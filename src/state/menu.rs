// Open/closed state shared by the dropdown and mobile menu toggles.
// Every DOM mutation (class + aria-expanded) is derived from this one
// boolean, so the two can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn force_open(&mut self) -> bool {
        self.open = true;
        self.open
    }

    pub fn force_close(&mut self) -> bool {
        self.open = false;
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_alternates() {
        let mut s = MenuState::default();
        assert!(s.toggle());
        assert!(!s.toggle());
        assert!(s.toggle());
    }

    #[test]
    fn forced_transitions_are_idempotent() {
        let mut s = MenuState::default();
        assert!(!s.force_close());
        assert!(!s.force_close());
        assert!(s.force_open());
        assert!(s.force_open());
        assert!(!s.force_close());
    }

    #[test]
    fn outside_close_wins_after_any_history() {
        let mut s = MenuState::default();
        for _ in 0..5 {
            s.toggle();
        }
        s.force_open();
        assert!(!s.force_close());
    }
}
