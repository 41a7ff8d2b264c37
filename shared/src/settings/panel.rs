use crate::models::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

/// Why an open drawer was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismiss {
    Overlay,
    CloseButton,
    Escape,
}

/// Where focus lands when the drawer opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// Hidden input at the end of the drawer; keeps the key field from
    /// dropping into edit mode on open.
    HiddenAnchor,
    /// First focusable control, i.e. the empty key field.
    Default,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelItem {
    ApiKey,
    Temperature,
    FontSize,
    Separator,
    SaveSession,
    PrePrompt,
}

pub const PANEL_LAYOUT: [PanelItem; 6] = [
    PanelItem::ApiKey,
    PanelItem::Temperature,
    PanelItem::FontSize,
    PanelItem::Separator,
    PanelItem::SaveSession,
    PanelItem::PrePrompt,
];

/// Open/closed state of the settings drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsPanel {
    state: PanelState,
}

impl SettingsPanel {
    /// Starts open when no API key is configured so first-run users land
    /// on the key field.
    pub fn mount(config: &Config) -> Self {
        let state = if config.has_api_key() {
            PanelState::Closed
        } else {
            PanelState::Open
        };
        tracing::debug!(?state, "settings panel mounted");
        Self { state }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn open(&mut self) {
        self.state = PanelState::Open;
    }

    pub fn close(&mut self, reason: Dismiss) {
        if self.is_open() {
            tracing::debug!(?reason, "settings panel dismissed");
        }
        self.state = PanelState::Closed;
    }

    pub fn toggle(&mut self) {
        match self.state {
            PanelState::Open => self.close(Dismiss::CloseButton),
            PanelState::Closed => self.open(),
        }
    }

    /// Handles a key pressed anywhere in the open drawer. Returns whether it
    /// closed the drawer.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.is_open() && key == "Escape" {
            self.close(Dismiss::Escape);
            true
        } else {
            false
        }
    }

    /// Where focus goes after the key editor is left with Enter or Escape.
    /// Its input is removed, so focus must stay inside the drawer for
    /// Escape to keep working.
    pub fn focus_after_key_edit(&self) -> FocusTarget {
        FocusTarget::HiddenAnchor
    }

    pub fn initial_focus(&self, config: &Config) -> FocusTarget {
        if config.has_api_key() {
            FocusTarget::HiddenAnchor
        } else {
            FocusTarget::Default
        }
    }

    pub fn layout(&self) -> &'static [PanelItem] {
        &PANEL_LAYOUT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(api_key: &str) -> Config {
        Config {
            api_key: api_key.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_first_run_opens() {
        let config = keyed("");
        let panel = SettingsPanel::mount(&config);
        assert_eq!(panel.state(), PanelState::Open);
        assert_eq!(panel.initial_focus(&config), FocusTarget::Default);
    }

    #[test]
    fn test_configured_key_starts_closed() {
        let config = keyed("sk-abc123xyz789");
        let mut panel = SettingsPanel::mount(&config);
        assert_eq!(panel.state(), PanelState::Closed);

        panel.open();
        assert!(panel.is_open());
        assert_eq!(panel.initial_focus(&config), FocusTarget::HiddenAnchor);
    }

    #[test]
    fn test_every_dismissal_closes() {
        for reason in [Dismiss::Overlay, Dismiss::CloseButton, Dismiss::Escape] {
            let mut panel = SettingsPanel::mount(&keyed(""));
            panel.close(reason);
            assert_eq!(panel.state(), PanelState::Closed);
        }
    }

    #[test]
    fn test_escape_closes_after_key_edit() {
        let config = keyed("");
        let mut panel = SettingsPanel::mount(&config);
        assert_eq!(panel.initial_focus(&config), FocusTarget::Default);

        // Key typed and committed; the editor input is gone
        assert_eq!(panel.focus_after_key_edit(), FocusTarget::HiddenAnchor);

        assert!(!panel.handle_key("Enter"));
        assert!(panel.is_open());
        assert!(panel.handle_key("Escape"));
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(!panel.handle_key("Escape"));
    }

    #[test]
    fn test_toggle() {
        let mut panel = SettingsPanel::mount(&keyed("sk-abc123xyz789"));
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_layout_order() {
        let panel = SettingsPanel::mount(&keyed(""));
        assert_eq!(
            panel.layout(),
            &[
                PanelItem::ApiKey,
                PanelItem::Temperature,
                PanelItem::FontSize,
                PanelItem::Separator,
                PanelItem::SaveSession,
                PanelItem::PrePrompt,
            ]
        );
    }
}
