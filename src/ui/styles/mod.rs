// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all page components.

pub mod button;
pub mod container;
pub mod text_input;
