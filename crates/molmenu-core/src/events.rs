//! Events emitted by the menu and actions that drive it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::options::VisibilityOptions;

/// Payload of the volume-controls widget when the user edits opacities.
///
/// Forwarded to the host unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpacityChange {
    /// Opacity of each control point (0..1).
    pub opacities: Vec<f32>,
    /// Scalar position of each control point.
    pub opacities_x: Vec<f32>,
}

/// A change the user made, carrying the new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum MenuEvent {
    IsoValueChanged(f32),
    ScaleValueChanged(f32),
    NormalModeChanged(i32),
    PlayChanged(bool),
    OpacitiesChanged(OpacityChange),
    VisibilityChanged(Arc<VisibilityOptions>),
    ColorMapChanged(String),
}

impl MenuEvent {
    /// Event name as a host would subscribe to it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsoValueChanged(_) => "isoValueChanged",
            Self::ScaleValueChanged(_) => "scaleValueChanged",
            Self::NormalModeChanged(_) => "normalModeChanged",
            Self::PlayChanged(_) => "playChanged",
            Self::OpacitiesChanged(_) => "opacitiesChanged",
            Self::VisibilityChanged(_) => "visibilityChanged",
            Self::ColorMapChanged(_) => "colorMapChanged",
        }
    }

    /// Serializes the event as `{"type": ..., "value": ...}`.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A user interaction bound to a widget, applied with
/// [`MoleculeMenu::dispatch`](crate::MoleculeMenu::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Slider moved to a new isovalue.
    SetIsoValue(f32),
    /// Text committed in the isovalue field.
    SetIsoValueText(String),
    /// Slider moved to a new animation scale.
    SetScaleValue(f32),
    /// Text committed in the animation scale field.
    SetScaleValueText(String),
    /// Value of the chosen normal-mode option.
    SelectNormalMode(String),
    /// Flip a layer; `observed` is the value shown when the row was rendered.
    ToggleVisibility { layer: String, observed: bool },
    TogglePlay,
    SelectColorMap(String),
    ForwardOpacities(OpacityChange),
}
