// SPDX-License-Identifier: MPL-2.0
//! Read-only theme configuration shared by every section of the page.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::{Color, Theme};

/// Semantic colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub primary_hover: Color,
    pub background: Color,
    pub text: Color,
    pub text_light: Color,
    pub white: Color,
}

/// Spacing steps, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

/// Font-size steps, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

/// Design tokens handed by reference to every view.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub colors: ColorScheme,
    pub spacing: SpacingScale,
    pub font_sizes: FontScale,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: ColorScheme {
                primary: palette::PRIMARY,
                primary_hover: palette::PRIMARY_HOVER,
                background: palette::BACKGROUND,
                text: palette::TEXT,
                text_light: palette::TEXT_LIGHT,
                white: palette::WHITE,
            },
            spacing: SpacingScale {
                xs: spacing::XS,
                sm: spacing::SM,
                md: spacing::MD,
                lg: spacing::LG,
                xl: spacing::XL,
            },
            font_sizes: FontScale {
                xs: typography::XS,
                sm: typography::SM,
                md: typography::MD,
                lg: typography::LG,
                xl: typography::XL,
            },
        }
    }
}

impl ThemeConfig {
    /// Iced theme whose palette follows these colors.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let base = Theme::Light.palette();
        Theme::custom(
            "Zen-cat".to_string(),
            iced::theme::Palette {
                background: self.colors.background,
                text: self.colors.text,
                primary: self.colors.primary,
                ..base
            },
        )
    }
}
