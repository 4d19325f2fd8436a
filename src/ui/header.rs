// SPDX-License-Identifier: MPL-2.0
//! Page header: logo on the left, language switch on the right.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::components::text;
use crate::ui::styles;
use crate::ui::theming::ThemeConfig;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Text},
    Element, Length, Padding,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub theme: &'a ThemeConfig,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageToggleRequested,
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ToggleLanguage => Event::LanguageToggleRequested,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Texts {
    pub logo: String,
    /// Label naming the language the button switches to.
    pub language_switch: String,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    texts: Texts,
}

impl State {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        let mut state = Self::default();
        state.refresh_texts(i18n);
        state
    }

    #[must_use]
    pub fn texts(&self) -> &Texts {
        &self.texts
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let theme = ctx.theme;

        let logo = text::heading(
            format!("😺 {}", self.texts.logo),
            theme.font_sizes.lg,
            theme.colors.text,
        );

        let switch = button(Text::new(self.texts.language_switch.as_str()).size(theme.font_sizes.sm))
            .on_press(Message::ToggleLanguage)
            .style(styles::button::text_link);

        let bar = Row::new()
            .align_y(Vertical::Center)
            .push(container(logo).width(Length::Fill))
            .push(switch);

        container(bar)
            .width(Length::Fill)
            .padding(Padding {
                top: theme.spacing.md,
                bottom: theme.spacing.md,
                ..Padding::ZERO
            })
            .into()
    }
}

impl Localized for State {
    fn refresh_texts(&mut self, i18n: &I18n) {
        self.texts = Texts {
            logo: i18n.tr("app_title"),
            language_switch: i18n.tr("language_switch"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn toggle_emits_language_event() {
        assert_eq!(
            update(&Message::ToggleLanguage),
            Event::LanguageToggleRequested
        );
    }

    #[test]
    fn switch_label_names_the_other_language() {
        let mut i18n = I18n::new(Language::Ru).expect("translations");
        let mut state = State::new(&i18n);
        assert_eq!(state.texts().language_switch, "EN");

        i18n.toggle_language();
        state.refresh_texts(&i18n);
        assert_eq!(state.texts().language_switch, "RU");
        assert_eq!(state.texts().logo, "Zen-cat");
    }

    #[test]
    fn header_view_renders() {
        let i18n = I18n::new(Language::En).expect("translations");
        let theme = ThemeConfig::default();
        let state = State::new(&i18n);
        let _element = state.view(ViewContext { theme: &theme });
    }
}
