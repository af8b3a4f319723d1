//! The molecule settings menu component.

use std::sync::Arc;

use crate::events::{MenuAction, MenuEvent, OpacityChange};
use crate::input::{parse_finite, parse_mode_index};
use crate::options::{PartialVolumeOptions, VisibilityOptions};
use crate::render::{render, MenuTree};
use crate::state::{MenuProps, MenuState};

/// Settings menu for a molecule viewer.
///
/// Holds the menu state, applies user interactions through its handlers and
/// queues a [`MenuEvent`] for every accepted change. The host drains the
/// queue with [`MoleculeMenu::take_events`] after each frame.
///
/// ```
/// use molmenu_core::{MenuEvent, MenuProps, MoleculeMenu};
///
/// let mut menu = MoleculeMenu::new(MenuProps {
///     has_volume: true,
///     ..Default::default()
/// });
/// menu.iso_value_handler(0.0234);
/// assert_eq!(menu.take_events(), vec![MenuEvent::IsoValueChanged(0.0234)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoleculeMenu {
    state: MenuState,
    events: Vec<MenuEvent>,
}

impl MoleculeMenu {
    /// Creates a menu from host-supplied props.
    pub fn new(props: MenuProps) -> Self {
        Self {
            state: props.into(),
            events: Vec::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// Returns the current state as props, e.g. to persist it.
    pub fn props(&self) -> MenuProps {
        MenuProps::from(&self.state)
    }

    /// Replaces the whole state with new props. Queued events are kept.
    pub fn set_props(&mut self, props: MenuProps) {
        self.state = props.into();
    }

    // -- host setters --

    pub fn set_has_volume(&mut self, has_volume: bool) {
        self.state.has_volume = has_volume;
    }

    pub fn set_n_modes(&mut self, n_modes: i32) {
        self.state.n_modes = n_modes;
    }

    pub fn set_volume_options(&mut self, options: Option<PartialVolumeOptions>) {
        self.state.volume_options = options;
    }

    pub fn set_color_maps(&mut self, color_maps: Vec<String>) {
        self.state.color_maps = color_maps;
    }

    pub fn set_visibility_options(&mut self, options: VisibilityOptions) {
        self.state.visibility_options = Arc::new(options);
    }

    pub fn set_iso_value(&mut self, value: f32) {
        self.state.iso_value = value;
    }

    pub fn set_scale_value(&mut self, value: f32) {
        self.state.scale_value = value;
    }

    pub fn set_i_mode(&mut self, i_mode: i32) {
        self.state.i_mode = i_mode;
    }

    pub fn set_play(&mut self, play: bool) {
        self.state.play = play;
    }

    pub fn set_active_map(&mut self, name: impl Into<String>) {
        self.state.active_map = name.into();
    }

    // -- lifecycle --

    /// Called by the host once the menu is first shown.
    pub fn mounted(&self) {
        log::debug!("molecule menu mounted");
    }

    /// Called by the host after a frame in which the state changed.
    pub fn updated(&self) {
        log::debug!("molecule menu updated");
    }

    /// Called by the host when the menu is removed.
    pub fn unmounted(&self) {
        log::debug!("molecule menu unmounted");
    }

    // -- events --

    /// Events queued since the last call to [`MoleculeMenu::take_events`].
    pub fn events(&self) -> &[MenuEvent] {
        &self.events
    }

    /// Drains the queued events.
    pub fn take_events(&mut self) -> Vec<MenuEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: MenuEvent) {
        log::trace!("emit {}", event.name());
        self.events.push(event);
    }

    // -- handlers --

    /// Sets the isovalue. Non-finite or unchanged values are ignored.
    ///
    /// Returns whether an event was emitted.
    #[allow(clippy::float_cmp)]
    pub fn iso_value_handler(&mut self, value: f32) -> bool {
        if !value.is_finite() || value == self.state.iso_value {
            return false;
        }
        self.state.iso_value = value;
        self.emit(MenuEvent::IsoValueChanged(value));
        true
    }

    /// Sets the animation scale. Non-finite or unchanged values are ignored.
    #[allow(clippy::float_cmp)]
    pub fn scale_value_handler(&mut self, value: f32) -> bool {
        if !value.is_finite() || value == self.state.scale_value {
            return false;
        }
        self.state.scale_value = value;
        self.emit(MenuEvent::ScaleValueChanged(value));
        true
    }

    /// Selects a normal mode from its option value (`"-1"` for none).
    pub fn normal_mode_handler(&mut self, value: &str) -> bool {
        let i_mode = match parse_mode_index(value) {
            Ok(i_mode) => i_mode,
            Err(e) => {
                log::debug!("ignoring normal mode selection: {e}");
                return false;
            }
        };
        if i_mode == self.state.i_mode {
            return false;
        }
        self.state.i_mode = i_mode;
        self.emit(MenuEvent::NormalModeChanged(i_mode));
        true
    }

    /// Sets `key` to the inverse of `observed`, the value the user saw.
    ///
    /// Always emits, even if the stored value already differs from
    /// `observed`.
    pub fn toggle_visibility_handler(&mut self, key: &str, observed: bool) -> bool {
        let toggled = Arc::new(self.state.visibility_options.with_toggled(key, observed));
        self.state.visibility_options = Arc::clone(&toggled);
        self.emit(MenuEvent::VisibilityChanged(toggled));
        true
    }

    /// Flips play/pause.
    pub fn play_handler(&mut self) -> bool {
        self.state.play = !self.state.play;
        self.emit(MenuEvent::PlayChanged(self.state.play));
        true
    }

    /// Selects a color map. Re-selecting the active map is ignored.
    pub fn color_map_handler(&mut self, name: &str) -> bool {
        if name == self.state.active_map {
            return false;
        }
        self.state.active_map = name.to_string();
        self.emit(MenuEvent::ColorMapChanged(name.to_string()));
        true
    }

    /// Forwards an opacity edit from the volume controls.
    pub fn opacities_handler(&mut self, change: OpacityChange) -> bool {
        self.emit(MenuEvent::OpacitiesChanged(change));
        true
    }

    /// Applies an action produced by a rendered widget.
    ///
    /// Returns whether an event was emitted.
    pub fn dispatch(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::SetIsoValue(value) => self.iso_value_handler(value),
            MenuAction::SetIsoValueText(text) => match parse_finite(&text) {
                Ok(value) => self.iso_value_handler(value),
                Err(e) => {
                    log::debug!("ignoring isovalue input: {e}");
                    false
                }
            },
            MenuAction::SetScaleValue(value) => self.scale_value_handler(value),
            MenuAction::SetScaleValueText(text) => match parse_finite(&text) {
                Ok(value) => self.scale_value_handler(value),
                Err(e) => {
                    log::debug!("ignoring animation scale input: {e}");
                    false
                }
            },
            MenuAction::SelectNormalMode(value) => self.normal_mode_handler(&value),
            MenuAction::ToggleVisibility { layer, observed } => {
                self.toggle_visibility_handler(&layer, observed)
            }
            MenuAction::TogglePlay => self.play_handler(),
            MenuAction::SelectColorMap(name) => self.color_map_handler(&name),
            MenuAction::ForwardOpacities(change) => self.opacities_handler(change),
        }
    }

    /// Builds the menu description for the current state.
    pub fn render(&self) -> Option<MenuTree> {
        render(&self.state)
    }
}
