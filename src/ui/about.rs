// SPDX-License-Identifier: MPL-2.0
//! About section: team description next to a meditating cat.
//!
//! Wide layouts split the row two to one between the text and the framed
//! illustration. Compact layouts stack the text above the illustration.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::components::text;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::layout::LayoutTier;
use crate::ui::styles;
use crate::ui::theming::ThemeConfig;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Row},
    Element, Length,
};

const MEDITATING_CAT: &str = "🧘‍♂️😸";

/// Contextual data needed to render the about section.
pub struct ViewContext<'a> {
    pub theme: &'a ThemeConfig,
    pub layout: LayoutTier,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Texts {
    pub title: String,
    pub body: String,
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

    /// Render the about section for the current layout tier.
    pub fn view<'a, M: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, M> {
        let theme = ctx.theme;

        let description = Column::new()
            .spacing(theme.spacing.sm)
            .push(text::heading(
                self.texts.title.clone(),
                theme.font_sizes.lg,
                theme.colors.text,
            ))
            .push(text::body(
                self.texts.body.clone(),
                theme.font_sizes.sm,
                theme.colors.text_light,
            ));

        let illustration = container(text::emoji(MEDITATING_CAT, typography::ABOUT_EMOJI))
            .center(Length::Fixed(sizing::ABOUT_IMAGE))
            .style(styles::container::round_frame(theme));

        let body: Element<'a, M> = match ctx.layout {
            LayoutTier::Wide => Row::new()
                .spacing(theme.spacing.lg)
                .align_y(Vertical::Center)
                .push(container(description).width(Length::FillPortion(2)))
                .push(
                    container(illustration)
                        .width(Length::FillPortion(1))
                        .align_x(Horizontal::Center),
                )
                .into(),
            LayoutTier::Compact => Column::new()
                .spacing(theme.spacing.lg)
                .align_x(Horizontal::Center)
                .push(description)
                .push(illustration)
                .into(),
        };

        container(body)
            .width(Length::Fill)
            .padding([theme.spacing.xl, theme.spacing.md])
            .into()
    }
}

impl Localized for State {
    fn refresh_texts(&mut self, i18n: &I18n) {
        self.texts = Texts {
            title: i18n.tr("about_title"),
            body: i18n.tr("about_text"),
        };
    }
}
