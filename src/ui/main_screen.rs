// SPDX-License-Identifier: MPL-2.0
//! Hero block with the slogan and the calm cat.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::components::text;
use crate::ui::design_tokens::typography;
use crate::ui::theming::ThemeConfig;
use iced::{
    alignment::Horizontal,
    widget::{container, Column, Space},
    Element, Length, Padding,
};

const CAT: &str = "😸";

pub struct ViewContext<'a> {
    pub theme: &'a ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Texts {
    pub title: String,
    pub subtitle: String,
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

    pub fn view<'a, M: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, M> {
        let theme = ctx.theme;

        let content = Column::new()
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .spacing(theme.spacing.sm)
            .push(text::heading(
                self.texts.title.clone(),
                theme.font_sizes.xl,
                theme.colors.text,
            ))
            .push(Space::new().height(theme.spacing.md))
            .push(text::body(
                self.texts.subtitle.clone(),
                theme.font_sizes.md,
                theme.colors.text_light,
            ))
            .push(Space::new().height(theme.spacing.lg))
            .push(text::emoji(CAT, typography::HERO_EMOJI));

        container(content)
            .width(Length::Fill)
            .padding(Padding {
                top: theme.spacing.xl,
                bottom: theme.spacing.xl,
                left: theme.spacing.md,
                right: theme.spacing.md,
            })
            .into()
    }
}

impl Localized for State {
    fn refresh_texts(&mut self, i18n: &I18n) {
        self.texts = Texts {
            title: i18n.tr("main_title"),
            subtitle: i18n.tr("main_subtitle"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn texts_follow_language() {
        let mut i18n = I18n::new(Language::Ru).expect("translations");
        let mut state = State::new(&i18n);
        assert_eq!(state.texts().title, "ИТ, КОТОРОЕ НЕ ТРЕВОЖИТ");

        i18n.set_language("en");
        state.refresh_texts(&i18n);
        assert_eq!(state.texts().title, "IT THAT DOESN'T DISTURB");
        assert_eq!(state.texts().subtitle, "Minimalism. Calm. Reliability.");
    }

    #[test]
    fn main_screen_view_renders() {
        let i18n = I18n::new(Language::Ru).expect("translations");
        let theme = ThemeConfig::default();
        let state = State::new(&i18n);
        let _element: Element<'_, ()> = state.view(ViewContext { theme: &theme });
    }
}
