// SPDX-License-Identifier: MPL-2.0
//! Footer with a divider and the copyright line.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::components::text;
use crate::ui::theming::ThemeConfig;
use iced::{
    alignment::Horizontal,
    widget::{container, rule, Column},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub theme: &'a ThemeConfig,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    copyright: String,
}

impl State {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        let mut state = Self::default();
        state.refresh_texts(i18n);
        state
    }

    #[must_use]
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn view<'a, M: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, M> {
        let theme = ctx.theme;

        let content = Column::new()
            .width(Length::Fill)
            .spacing(theme.spacing.md)
            .align_x(Horizontal::Center)
            .push(rule::horizontal(1))
            .push(text::body(
                self.copyright.clone(),
                theme.font_sizes.xs,
                theme.colors.text_light,
            ));

        container(content)
            .width(Length::Fill)
            .padding([theme.spacing.lg, 0.0])
            .into()
    }
}

impl Localized for State {
    fn refresh_texts(&mut self, i18n: &I18n) {
        self.copyright = i18n.tr("copyright");
    }
}
