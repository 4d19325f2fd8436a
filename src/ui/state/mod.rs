// SPDX-License-Identifier: MPL-2.0
//! Small state types shared by UI components.

pub mod reset_delay;

pub use reset_delay::ResetDelay;
