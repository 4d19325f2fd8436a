// SPDX-License-Identifier: MPL-2.0
//! User interface sections and shared styling.
//!
//! Each section follows the Elm-style "state down, messages up" pattern and
//! caches its localized texts, re-reading them through
//! [`crate::i18n::Localized`] after a language switch.
//!
//! # Sections
//!
//! - [`header`] - Logo and language switch
//! - [`main_screen`] - Slogan and hero cat
//! - [`services`] - Grid of service cards
//! - [`about`] - Team description
//! - [`contact_form`] - Contact form with simulated submission
//! - [`footer`] - Copyright line
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Text building blocks
//! - [`state`] - Validated value types
//! - [`styles`] - Button, container and text input styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Theme configuration passed to every view
//! - [`layout`] - Compact and wide layout tiers

pub mod about;
pub mod components;
pub mod contact_form;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod layout;
pub mod main_screen;
pub mod services;
pub mod state;
pub mod styles;
pub mod theming;
