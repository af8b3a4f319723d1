//! Core model for molmenu-rs.
//!
//! This crate provides the toolkit-independent parts of the molecule settings menu:
//! - [`MoleculeMenu`], the component holding menu state and applying user input
//! - [`render`], a pure function from state to a [`MenuTree`] description
//! - Volume and visibility options with default composition
//! - A registry of named color maps
//! - [`MenuProps`], the JSON-loadable configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Simple accessors and builders don't need must_use
#![allow(clippy::must_use_candidate)]
// Bin and sample indices are small
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod color_maps;
pub mod error;
pub mod events;
pub mod input;
pub mod menu;
pub mod options;
pub mod render;
pub mod state;

pub use color_maps::{ColorMap, ColorMapRegistry, DEFAULT_COLOR_MAP};
pub use error::{MenuError, Result};
pub use events::{MenuAction, MenuEvent, OpacityChange};
pub use input::{format_fixed, parse_finite, parse_mode_index};
pub use menu::MoleculeMenu;
pub use options::{
    compose_visibility_options, compose_volume_options, Histogram, PartialVolumeOptions,
    VisibilityOptions, VolumeOptions, ISO_SURFACES, VOLUME,
};
pub use render::{
    render, MenuRow, MenuTree, NumericInput, PlayButton, PlayIcon, RangeRow, SelectOption,
    SelectRow, SelectTarget, ToggleRow, ValueTarget, Widget,
};
pub use state::{MenuProps, MenuState};

// Re-export glam types for convenience
pub use glam::Vec3;
