//! Pure description of the menu for a given state.
//!
//! [`render`] turns a [`MenuState`] into a [`MenuTree`]: an ordered list of
//! rows, each naming its widget, current values and the action it triggers.
//! A front-end draws the rows and feeds the actions back to
//! [`MoleculeMenu::dispatch`](crate::MoleculeMenu::dispatch).

use crate::events::MenuAction;
use crate::input::format_fixed;
use crate::options::{
    compose_visibility_options, compose_volume_options, VolumeOptions, ISO_SURFACES, VOLUME,
};
use crate::state::MenuState;

/// Isovalue slider bounds and step.
pub const ISO_VALUE_MIN: f32 = 0.0005;
pub const ISO_VALUE_MAX: f32 = 0.05;
pub const ISO_VALUE_STEP: f32 = 0.0001;

/// Animation scale slider bounds and step.
pub const SCALE_VALUE_MIN: f32 = 0.5;
pub const SCALE_VALUE_MAX: f32 = 3.0;
pub const SCALE_VALUE_STEP: f32 = 0.5;

/// Debounce applied to sliders, in milliseconds.
pub const SLIDER_DEBOUNCE_MS: u32 = 150;
/// Debounce applied to numeric text inputs, in milliseconds.
pub const INPUT_DEBOUNCE_MS: u32 = 500;

/// Value of the "None" normal-mode option.
pub const NO_MODE_VALUE: &str = "-1";

/// Stable row keys.
pub mod keys {
    pub const ISO_SURFACE_TOGGLE: &str = "isoSurfaceToggle";
    pub const ISO_SURFACE_SLIDER: &str = "isoSurfaceSlider";
    pub const VOLUME_TOGGLE: &str = "volumeToggle";
    pub const VOLUME_CONTROLS: &str = "volumeControls";
    pub const COLOR_MAP_SELECT: &str = "colormapSelect";
    pub const NORMAL_MODE_SELECT: &str = "normalModeSelect";
    pub const ANIMATION_SCALE_SLIDER: &str = "animationScaleSlider";
}

/// The rendered menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuTree {
    pub rows: Vec<MenuRow>,
}

impl MenuTree {
    /// Finds a row by key.
    pub fn row(&self, key: &str) -> Option<&MenuRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Row keys in display order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.key).collect()
    }
}

/// One row of the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub key: &'static str,
    /// Disabled rows are drawn but do not accept input.
    pub disabled: bool,
    pub widget: Widget,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Toggle(ToggleRow),
    Range(RangeRow),
    VolumeControls(VolumeOptions),
    Select(SelectRow),
}

/// A labeled on/off switch.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleRow {
    pub label: &'static str,
    pub checked: bool,
    /// Action for any change of the switch.
    pub on_change: MenuAction,
}

/// Which numeric value a slider/input pair writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTarget {
    IsoValue,
    ScaleValue,
}

impl ValueTarget {
    /// Action for a new slider value.
    pub fn set(self, value: f32) -> MenuAction {
        match self {
            Self::IsoValue => MenuAction::SetIsoValue(value),
            Self::ScaleValue => MenuAction::SetScaleValue(value),
        }
    }

    /// Action for committed text.
    pub fn set_text(self, text: impl Into<String>) -> MenuAction {
        match self {
            Self::IsoValue => MenuAction::SetIsoValueText(text.into()),
            Self::ScaleValue => MenuAction::SetScaleValueText(text.into()),
        }
    }
}

/// A slider paired with a numeric text input.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRow {
    pub label: &'static str,
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub debounce_ms: u32,
    pub input: NumericInput,
    pub target: ValueTarget,
}

/// Text shown in the numeric field next to a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    pub text: String,
    pub decimals: usize,
    pub debounce_ms: u32,
}

/// Which value a select writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget {
    NormalMode,
    ColorMap,
}

impl SelectTarget {
    /// Action for a chosen option value.
    pub fn select(self, value: impl Into<String>) -> MenuAction {
        match self {
            Self::NormalMode => MenuAction::SelectNormalMode(value.into()),
            Self::ColorMap => MenuAction::SelectColorMap(value.into()),
        }
    }
}

/// A labeled dropdown, optionally with a button at its end.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectRow {
    pub label: &'static str,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub target: SelectTarget,
    pub end_button: Option<PlayButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Play/pause button; the icon shows what a click will do.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayButton {
    pub icon: PlayIcon,
    pub on_click: MenuAction,
}

/// Options of the normal-mode select: "None" then one per mode.
pub fn normal_mode_options(n_modes: i32) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: NO_MODE_VALUE.to_string(),
        label: "None".to_string(),
    }];
    options.extend((0..n_modes.max(0)).map(|i| SelectOption {
        value: i.to_string(),
        label: i.to_string(),
    }));
    options
}

/// Options of the color map select, in the given order.
pub fn color_map_options(color_maps: &[String]) -> Vec<SelectOption> {
    color_maps
        .iter()
        .map(|name| SelectOption {
            value: name.clone(),
            label: name.clone(),
        })
        .collect()
}

/// Builds the menu for `state`; `None` when there is nothing to show.
pub fn render(state: &MenuState) -> Option<MenuTree> {
    if !state.has_volume && state.n_modes <= 0 {
        return None;
    }

    let mode_options = normal_mode_options(state.n_modes);
    let map_options = color_map_options(&state.color_maps);

    let volume_options = compose_volume_options(state.volume_options.as_ref());
    let visibility = compose_visibility_options(Some(state.visibility_options.as_ref()));

    let mut rows = Vec::new();

    if state.has_volume {
        let iso_visible = visibility.iso_surfaces();
        rows.push(MenuRow {
            key: keys::ISO_SURFACE_TOGGLE,
            disabled: false,
            widget: Widget::Toggle(ToggleRow {
                label: "Show Isosurface",
                checked: iso_visible,
                on_change: MenuAction::ToggleVisibility {
                    layer: ISO_SURFACES.to_string(),
                    observed: iso_visible,
                },
            }),
        });

        if iso_visible {
            rows.push(MenuRow {
                key: keys::ISO_SURFACE_SLIDER,
                disabled: false,
                widget: Widget::Range(RangeRow {
                    label: "Isovalue",
                    value: state.iso_value,
                    min: ISO_VALUE_MIN,
                    max: ISO_VALUE_MAX,
                    step: ISO_VALUE_STEP,
                    debounce_ms: SLIDER_DEBOUNCE_MS,
                    input: NumericInput {
                        text: format_fixed(state.iso_value, 4, "0.0000"),
                        decimals: 4,
                        debounce_ms: INPUT_DEBOUNCE_MS,
                    },
                    target: ValueTarget::IsoValue,
                }),
            });
        }

        let volume_visible = visibility.volume();
        rows.push(MenuRow {
            key: keys::VOLUME_TOGGLE,
            disabled: false,
            widget: Widget::Toggle(ToggleRow {
                label: "Show Volume",
                checked: volume_visible,
                on_change: MenuAction::ToggleVisibility {
                    layer: VOLUME.to_string(),
                    observed: volume_visible,
                },
            }),
        });

        if volume_visible {
            rows.push(MenuRow {
                key: keys::VOLUME_CONTROLS,
                disabled: false,
                widget: Widget::VolumeControls(volume_options),
            });
            rows.push(MenuRow {
                key: keys::COLOR_MAP_SELECT,
                disabled: false,
                widget: Widget::Select(SelectRow {
                    label: "Color Map",
                    value: state.active_map.clone(),
                    options: map_options,
                    target: SelectTarget::ColorMap,
                    end_button: None,
                }),
            });
        }
    }

    if state.n_modes > 0 {
        rows.push(MenuRow {
            key: keys::NORMAL_MODE_SELECT,
            disabled: false,
            widget: Widget::Select(SelectRow {
                label: "Normal Mode",
                value: state.i_mode.to_string(),
                options: mode_options,
                target: SelectTarget::NormalMode,
                end_button: Some(PlayButton {
                    icon: if state.play {
                        PlayIcon::Pause
                    } else {
                        PlayIcon::Play
                    },
                    on_click: MenuAction::TogglePlay,
                }),
            }),
        });
        rows.push(MenuRow {
            key: keys::ANIMATION_SCALE_SLIDER,
            disabled: !state.play || state.i_mode < 0,
            widget: Widget::Range(RangeRow {
                label: "Animation Scale",
                value: state.scale_value,
                min: SCALE_VALUE_MIN,
                max: SCALE_VALUE_MAX,
                step: SCALE_VALUE_STEP,
                debounce_ms: SLIDER_DEBOUNCE_MS,
                input: NumericInput {
                    text: format_fixed(state.scale_value, 1, "0.0"),
                    decimals: 1,
                    debounce_ms: INPUT_DEBOUNCE_MS,
                },
                target: ValueTarget::ScaleValue,
            }),
        });
    }

    Some(MenuTree { rows })
}
