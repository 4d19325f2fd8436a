// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ThemeConfig;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-window surface in the page background color.
pub fn page(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// White rounded card used for service tiles.
pub fn card(theme: &ThemeConfig) -> impl Fn(&Theme) -> container::Style {
    let surface = theme.colors.white;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Circular white frame around an illustration.
pub fn round_frame(theme: &ThemeConfig) -> impl Fn(&Theme) -> container::Style {
    let surface = theme.colors.white;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_white_and_rounded() {
        let config = ThemeConfig::default();
        let style = card(&config)(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(Color::WHITE)));
        assert_eq!(style.border.radius, radius::MD.into());
    }

    #[test]
    fn page_uses_given_background() {
        let config = ThemeConfig::default();
        let style = page(config.colors.background)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(config.colors.background))
        );
    }
}
