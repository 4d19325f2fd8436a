// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ThemeConfig;
use iced::widget::text_input;
use iced::{Background, Theme};

/// Outlined field: gray border at rest, accent border while focused.
pub fn field(
    config: &ThemeConfig,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let colors = config.colors;
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        style.background = Background::Color(colors.white);
        style.value = colors.text;
        style.placeholder = colors.text_light;
        style.border.radius = radius::SM.into();
        match status {
            text_input::Status::Focused { .. } => {
                style.border.color = colors.primary;
                style.border.width = border::WIDTH_MD;
            }
            _ => {
                style.border.color = colors.text_light;
                style.border.width = border::WIDTH_SM;
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_field_uses_accent_border() {
        let config = ThemeConfig::default();
        let style_fn = field(&config);
        let focused = style_fn(&Theme::Light, text_input::Status::Focused { is_hovered: false });
        let idle = style_fn(&Theme::Light, text_input::Status::Active);

        assert_eq!(focused.border.color, config.colors.primary);
        assert_eq!(idle.border.color, config.colors.text_light);
        assert!(focused.border.width > idle.border.width);
    }
}
