//! UI layer for molmenu-rs using egui.

// Pixel columns are small positive counts
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]

pub mod panel;
pub mod volume_controls;

pub use panel::*;
pub use volume_controls::*;
