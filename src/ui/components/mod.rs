// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple sections.
//!
//! # Components
//!
//! - [`text`] - Heading, body and emoji text with the page's font choices

pub mod text;
