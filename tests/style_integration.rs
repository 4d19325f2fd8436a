// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as iced_button, text_input as iced_text_input};
    use iced::Theme;
    use zen_cat::ui::design_tokens::{palette, sizing, spacing};
    use zen_cat::ui::layout::LayoutTier;
    use zen_cat::ui::styles::{button, container, text_input};
    use zen_cat::ui::theming::ThemeConfig;

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Light;
        let config = ThemeConfig::default();

        let _ = button::primary(&theme, iced_button::Status::Active);
        let _ = button::text_link(&theme, iced_button::Status::Hovered);
        let _ = container::card(&config)(&theme);
        let _ = container::round_frame(&config)(&theme);
        let _ = container::page(config.colors.background)(&theme);
        let _ = text_input::field(&config)(&theme, iced_text_input::Status::Active);
    }

    #[test]
    fn theme_config_matches_tokens() {
        let config = ThemeConfig::default();
        assert_eq!(config.colors.primary, palette::PRIMARY);
        assert_eq!(config.colors.background, palette::BACKGROUND);
        assert_eq!(config.spacing.xs, spacing::XS);
        assert_eq!(config.spacing.xl, spacing::XL);
    }

    #[test]
    fn two_cards_fit_the_content_width() {
        let row = 2.0 * sizing::CARD_WIDTH + spacing::MD;
        assert!(row <= sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn default_window_is_wide() {
        assert_eq!(
            LayoutTier::from_width(zen_cat::config::WINDOW_DEFAULT_WIDTH),
            LayoutTier::Wide
        );
        assert_eq!(
            LayoutTier::from_width(zen_cat::config::MIN_WINDOW_WIDTH),
            LayoutTier::Compact
        );
    }
}
