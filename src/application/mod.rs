// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports the player and service depend on.
//!
//! - [`port`]: traits implemented by the host or by [`crate::infrastructure`]
//!
//! The domain layer never sees these traits; the service and the player
//! modal are generic over them.

pub mod port;
