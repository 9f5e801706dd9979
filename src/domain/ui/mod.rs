// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains interaction value objects that are independent
//! of any presentation technology.

pub mod newtypes;

pub use newtypes::{AvatarSize, DebounceDelay, SwipeThreshold};
