// SPDX-License-Identifier: MPL-2.0
//! `zen_cat` is a single-page "Zen-cat" company site rendered with Iced.
//!
//! The page presents the company's services, an about-us blurb and a contact
//! form with a simulated submission. All texts come from embedded Fluent
//! translations and can be switched between Russian and English at runtime.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
