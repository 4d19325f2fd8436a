// SPDX-License-Identifier: MPL-2.0
//! Two-tier responsive layout.

use crate::ui::design_tokens::sizing;

/// How sections arrange their content for the current window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutTier {
    /// Narrow windows: everything stacks in one column.
    Compact,
    /// Side-by-side content and a two-column service grid.
    #[default]
    Wide,
}

impl LayoutTier {
    #[must_use]
    pub fn from_width(width: f32) -> Self {
        if width >= sizing::BREAKPOINT_WIDE {
            LayoutTier::Wide
        } else {
            LayoutTier::Compact
        }
    }

    /// Number of service cards placed on one row.
    #[must_use]
    pub fn grid_columns(self) -> usize {
        match self {
            LayoutTier::Compact => 1,
            LayoutTier::Wide => 2,
        }
    }
}
