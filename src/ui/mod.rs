// SPDX-License-Identifier: MPL-2.0
//! iced views over the gallery and player models.
//!
//! Views are pure functions of the model; they render nothing themselves
//! and emit the messages the models consume.

pub mod controls;
pub mod design_tokens;
pub mod gallery;
pub mod overlay;
pub mod player;
pub mod styles;
