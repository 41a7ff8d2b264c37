//! One controller per settings control.
//!
//! Controllers keep only transient UI state (edit buffer, slider position,
//! hover). Every change is written through a store as a copy of the current
//! snapshot with a single field replaced.

use super::mask::mask_secret;
use super::scale::{FONT_SIZE_SCALE, SliderMark, SliderScale, TEMPERATURE_SCALE};
use super::store::{ConfigStore, SessionStore};
use crate::models::{Config, RequestParams};
use std::marker::PhantomData;

/// The save-session switch is rendered but not interactive. Turning it off
/// wipes stored history, which is not yet safe to expose.
pub const SAVE_SESSION_TOGGLE_ENABLED: bool = false;

/// Editable credential. Shows the masked key until edit mode is entered.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiKeyField {
    buffer: String,
    pre_edit: String,
    editing: bool,
}

impl ApiKeyField {
    pub fn new(config: &Config) -> Self {
        let masked = mask_secret(&config.api_key);
        Self {
            buffer: masked.clone(),
            pre_edit: masked,
            editing: false,
        }
    }

    /// Masked key while idle, plaintext while editing.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self, config: &Config) {
        if self.editing {
            return;
        }
        self.pre_edit = std::mem::replace(&mut self.buffer, config.api_key.clone());
        self.editing = true;
    }

    pub fn input(&mut self, text: impl Into<String>) {
        if self.editing {
            self.buffer = text.into();
        }
    }

    /// Stores the edited key and goes back to the masked display.
    pub fn commit<S: ConfigStore + ?Sized>(&mut self, store: &S) {
        if !self.editing {
            return;
        }
        self.editing = false;

        let api_key = std::mem::take(&mut self.buffer);
        self.buffer = mask_secret(&api_key);
        self.pre_edit = self.buffer.clone();

        tracing::debug!(has_api_key = !api_key.is_empty(), "api key committed");
        store.set_config(Config {
            api_key,
            ..store.config()
        });
    }

    /// Drops the edit and shows the masked value from before it started.
    pub fn cancel(&mut self) {
        if !self.editing {
            return;
        }
        self.editing = false;
        self.buffer = self.pre_edit.clone();
    }

    /// Picks up a key changed elsewhere. Ignored mid-edit.
    pub fn sync(&mut self, config: &Config) {
        if !self.editing {
            self.buffer = mask_secret(&config.api_key);
            self.pre_edit = self.buffer.clone();
        }
    }
}

/// Ties a slider to one stored decimal setting.
pub trait SliderBinding {
    const SCALE: SliderScale;

    fn read<S: ConfigStore + ?Sized>(store: &S) -> f32;
    fn write<S: ConfigStore + ?Sized>(store: &S, value: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemperatureBinding;

impl SliderBinding for TemperatureBinding {
    const SCALE: SliderScale = TEMPERATURE_SCALE;

    fn read<S: ConfigStore + ?Sized>(store: &S) -> f32 {
        store.req_params().temperature
    }

    fn write<S: ConfigStore + ?Sized>(store: &S, temperature: f32) {
        store.set_req_params(RequestParams {
            temperature,
            ..store.req_params()
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSizeBinding;

impl SliderBinding for FontSizeBinding {
    const SCALE: SliderScale = FONT_SIZE_SCALE;

    fn read<S: ConfigStore + ?Sized>(store: &S) -> f32 {
        store.config().fontsize
    }

    fn write<S: ConfigStore + ?Sized>(store: &S, fontsize: f32) {
        store.set_config(Config {
            fontsize,
            ..store.config()
        });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderField<B> {
    position: u8,
    hovered: bool,
    binding: PhantomData<B>,
}

pub type TemperatureField = SliderField<TemperatureBinding>;
pub type FontSizeField = SliderField<FontSizeBinding>;

impl<B: SliderBinding> SliderField<B> {
    pub fn new<S: ConfigStore + ?Sized>(store: &S) -> Self {
        Self {
            position: B::SCALE.position_of(B::read(store)),
            hovered: false,
            binding: PhantomData,
        }
    }

    pub fn scale(&self) -> SliderScale {
        B::SCALE
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn marks(&self) -> [SliderMark; 1] {
        [B::SCALE.mark]
    }

    /// Moves the thumb and writes the new value right away; drags emit one
    /// write per intermediate position.
    pub fn set_position<S: ConfigStore + ?Sized>(&mut self, position: u8, store: &S) {
        self.position = B::SCALE.clamp(position);
        B::write(store, B::SCALE.value_of(self.position));
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    /// Label floating over the thumb, only while hovered.
    pub fn tooltip(&self) -> Option<String> {
        self.hovered.then(|| B::SCALE.label(self.position))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied,
    Disabled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveSessionField {
    enabled: bool,
}

impl Default for SaveSessionField {
    fn default() -> Self {
        Self::with_enabled(SAVE_SESSION_TOGGLE_ENABLED)
    }
}

impl SaveSessionField {
    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_checked(&self, config: &Config) -> bool {
        config.save_session
    }

    /// Flips `save_session`. Switching it off clears stored history first.
    pub fn toggle<C, H>(&self, store: &C, sessions: &H) -> ToggleOutcome
    where
        C: ConfigStore + ?Sized,
        H: SessionStore + ?Sized,
    {
        if !self.enabled {
            return ToggleOutcome::Disabled;
        }

        let config = store.config();
        if config.save_session {
            tracing::info!("session saving turned off, clearing history");
            sessions.update_session(Vec::new());
        }
        store.set_config(Config {
            save_session: !config.save_session,
            ..config
        });
        ToggleOutcome::Applied
    }
}

/// Experimental slash-command switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrePromptField;

impl PrePromptField {
    pub fn is_checked(&self, config: &Config) -> bool {
        config.pre_prompt
    }

    pub fn toggle<S: ConfigStore + ?Sized>(&self, store: &S) {
        let config = store.config();
        store.set_config(Config {
            pre_prompt: !config.pre_prompt,
            ..config
        });
    }
}
