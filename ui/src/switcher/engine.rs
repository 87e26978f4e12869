//! Open/close state machine for the language dropdown.
//!
//! Ephemeral per switcher instance and independent of the locale store;
//! nothing here is persisted.

/// Dropdown panel state. Lives for the switcher's lifetime; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// The three events the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The toggle button was pressed.
    TogglePressed,
    /// A language entry was selected; the locale write happens alongside.
    EntrySelected,
    /// The full-viewport scrim behind the open panel was pressed.
    ScrimPressed,
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        matches!(self, DropdownState::Open)
    }

    pub fn apply(self, event: DropdownEvent) -> DropdownState {
        match (self, event) {
            (DropdownState::Closed, DropdownEvent::TogglePressed) => DropdownState::Open,
            (DropdownState::Open, DropdownEvent::TogglePressed) => DropdownState::Closed,
            (_, DropdownEvent::EntrySelected) => DropdownState::Closed,
            // The scrim only exists while the panel is open; applying the
            // event in Closed leaves the state alone.
            (_, DropdownEvent::ScrimPressed) => DropdownState::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(DropdownState::default(), DropdownState::Closed);
    }

    #[test]
    fn toggle_flips_both_ways() {
        let open = DropdownState::Closed.apply(DropdownEvent::TogglePressed);
        assert_eq!(open, DropdownState::Open);
        assert_eq!(open.apply(DropdownEvent::TogglePressed), DropdownState::Closed);
    }

    #[test]
    fn selecting_an_entry_closes_the_panel() {
        assert_eq!(
            DropdownState::Open.apply(DropdownEvent::EntrySelected),
            DropdownState::Closed
        );
    }

    #[test]
    fn scrim_press_closes_an_open_panel() {
        assert_eq!(
            DropdownState::Open.apply(DropdownEvent::ScrimPressed),
            DropdownState::Closed
        );
    }

    #[test]
    fn scrim_press_is_inert_when_closed() {
        assert_eq!(
            DropdownState::Closed.apply(DropdownEvent::ScrimPressed),
            DropdownState::Closed
        );
    }
}
