// SPDX-License-Identifier: MPL-2.0
//! Application-level plumbing shared by the library and the CLI.

pub mod paths;
