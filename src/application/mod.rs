// SPDX-License-Identifier: MPL-2.0
//! Application layer - seams between site behavior and its host.
//!
//! - [`port`]: Trait definitions the host page implements
//!
//! # Dependency Rule
//!
//! - Behavior modules (`ui`, `media`) depend on ports, never on a concrete host
//! - Hosts (a browser binding, a desktop shell, test doubles) implement the ports

pub mod port;
