// SPDX-License-Identifier: MPL-2.0
//! `confsite` implements the interactive behaviors of the Energieffektiv
//! Fremtid conference website as host-independent Rust components.
//!
//! The centrepiece is the gallery lightbox ([`ui::lightbox::GalleryNavigator`]),
//! a small state machine that drives an injected display surface. Around it
//! sit the hero halftone animation, name-derived pixel avatars, the
//! "add to calendar" invitation, a scroll-driven logo fader and a fragment
//! loader for shared page markup.

pub mod application;
pub mod calendar;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod ui;
