// SPDX-License-Identifier: MPL-2.0
//! Player session state, driven by media element events.

mod buffered;
mod event;
mod state;

pub use buffered::{BufferedRanges, TimeRange};
pub use event::MediaEvent;
pub use state::{Phase, PlayerState, DEFAULT_LOAD_ERROR};
