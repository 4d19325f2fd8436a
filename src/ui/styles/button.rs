// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Filled accent button used for the form's submit action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_HOVER,
        button::Status::Active | button::Status::Disabled => palette::PRIMARY,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: background,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Borderless text button, as used by the header's language switch.
pub fn text_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_HOVER,
        button::Status::Active | button::Status::Disabled => palette::TEXT,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn primary_button_darkens_on_hover() {
        let theme = Theme::Light;
        let normal = primary(&theme, button::Status::Active);
        let hover = primary(&theme, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn text_link_has_no_background() {
        let style = text_link(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette::TEXT);
    }
}
