//! Menu properties and the state derived from them.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color_maps::DEFAULT_COLOR_MAP;
use crate::error::Result;
use crate::options::{PartialVolumeOptions, VisibilityOptions};

/// Properties a host supplies to the menu.
///
/// Deserializes from JSON with the camelCase names a viewer page uses
/// (`hasVolume`, `nModes`, `isoValue`, ...). Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuProps {
    /// Whether the molecule carries volumetric data.
    pub has_volume: bool,
    /// Number of normal modes available for animation (`<= 0` for none).
    pub n_modes: i32,
    /// Transfer functions, possibly partial.
    pub volume_options: Option<PartialVolumeOptions>,
    /// Color map names offered in the color map select.
    pub color_maps: Vec<String>,
    /// Layer visibility, possibly partial.
    pub visibility_options: Option<VisibilityOptions>,
    /// Isosurface threshold.
    pub iso_value: f32,
    /// Animation speed multiplier.
    pub scale_value: f32,
    /// Selected normal mode, `-1` for none.
    pub i_mode: i32,
    /// Whether the normal-mode animation is running.
    pub play: bool,
    /// Selected color map name.
    pub active_map: String,
}

impl Default for MenuProps {
    fn default() -> Self {
        Self {
            has_volume: false,
            n_modes: -1,
            volume_options: None,
            color_maps: Vec::new(),
            visibility_options: None,
            iso_value: 0.01,
            scale_value: 1.0,
            i_mode: -1,
            play: true,
            active_map: DEFAULT_COLOR_MAP.to_string(),
        }
    }
}

impl MenuProps {
    /// Parses props from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads props from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading menu props from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Serializes props to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Current state of the menu.
///
/// Static inputs are only changed by the host; the echo fields
/// (visibility, isovalue, scale, mode, play, active map) are also written by
/// the menu's handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    pub has_volume: bool,
    pub n_modes: i32,
    pub volume_options: Option<PartialVolumeOptions>,
    pub color_maps: Vec<String>,
    /// Raw (uncomposed) visibility; shared with emitted events.
    pub visibility_options: Arc<VisibilityOptions>,
    pub iso_value: f32,
    pub scale_value: f32,
    pub i_mode: i32,
    pub play: bool,
    pub active_map: String,
}

impl Default for MenuState {
    fn default() -> Self {
        MenuProps::default().into()
    }
}

impl From<MenuProps> for MenuState {
    fn from(props: MenuProps) -> Self {
        Self {
            has_volume: props.has_volume,
            n_modes: props.n_modes,
            volume_options: props.volume_options,
            color_maps: props.color_maps,
            visibility_options: Arc::new(props.visibility_options.unwrap_or_default()),
            iso_value: props.iso_value,
            scale_value: props.scale_value,
            i_mode: props.i_mode,
            play: props.play,
            active_map: props.active_map,
        }
    }
}

impl From<&MenuState> for MenuProps {
    fn from(state: &MenuState) -> Self {
        Self {
            has_volume: state.has_volume,
            n_modes: state.n_modes,
            volume_options: state.volume_options.clone(),
            color_maps: state.color_maps.clone(),
            visibility_options: Some(state.visibility_options.as_ref().clone()),
            iso_value: state.iso_value,
            scale_value: state.scale_value,
            i_mode: state.i_mode,
            play: state.play,
            active_map: state.active_map.clone(),
        }
    }
}
