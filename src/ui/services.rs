// SPDX-License-Identifier: MPL-2.0
//! Services section: a titled grid of four service cards.
//!
//! The card table is static; only the texts are re-read on a language switch.
//! Wide layouts place two cards per row, compact layouts stack them.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::components::text;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::layout::LayoutTier;
use crate::ui::styles;
use crate::ui::theming::ThemeConfig;
use iced::{
    alignment::Horizontal,
    widget::{container, Column, Row},
    Element, Length,
};

/// Static description of one service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

/// Cards in display order.
pub const SERVICES: [ServiceCard; 4] = [
    ServiceCard {
        icon: "💻",
        title_key: "service_1_title",
        desc_key: "service_1_desc",
    },
    ServiceCard {
        icon: "🎨",
        title_key: "service_2_title",
        desc_key: "service_2_desc",
    },
    ServiceCard {
        icon: "📊",
        title_key: "service_3_title",
        desc_key: "service_3_desc",
    },
    ServiceCard {
        icon: "🔧",
        title_key: "service_4_title",
        desc_key: "service_4_desc",
    },
];

pub struct ViewContext<'a> {
    pub theme: &'a ThemeConfig,
    pub layout: LayoutTier,
}

/// Localized texts of a single card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardTexts {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    title: String,
    cards: Vec<CardTexts>,
}

impl State {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        let mut state = Self::default();
        state.refresh_texts(i18n);
        state
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn cards(&self) -> &[CardTexts] {
        &self.cards
    }

    pub fn view<'a, M: 'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, M> {
        let theme = ctx.theme;

        let mut grid = Column::new()
            .spacing(theme.spacing.md)
            .align_x(Horizontal::Center);

        let entries: Vec<_> = SERVICES.iter().zip(self.cards.iter()).collect();
        for chunk in entries.chunks(ctx.layout.grid_columns()) {
            let row = chunk
                .iter()
                .copied()
                .fold(Row::new().spacing(theme.spacing.md), |row, (service, texts)| {
                    row.push(card(service, texts, theme))
                });
            grid = grid.push(row);
        }

        let content = Column::new()
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .spacing(theme.spacing.lg)
            .push(text::heading(
                self.title.clone(),
                theme.font_sizes.lg,
                theme.colors.text,
            ))
            .push(grid);

        container(content)
            .width(Length::Fill)
            .padding([theme.spacing.xl, theme.spacing.md])
            .into()
    }
}

fn card<'a, M: 'a>(
    service: &ServiceCard,
    texts: &'a CardTexts,
    theme: &'a ThemeConfig,
) -> Element<'a, M> {
    let body = Column::new()
        .spacing(theme.spacing.xs)
        .push(text::emoji(service.icon, typography::CARD_ICON))
        .push(text::heading(
            texts.title.clone(),
            theme.font_sizes.md,
            theme.colors.text,
        ))
        .push(text::body(
            texts.description.clone(),
            theme.font_sizes.xs,
            theme.colors.text_light,
        ));

    container(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(theme.spacing.md)
        .style(styles::container::card(theme))
        .into()
}

impl Localized for State {
    fn refresh_texts(&mut self, i18n: &I18n) {
        self.title = i18n.tr("services_title");
        self.cards = SERVICES
            .iter()
            .map(|service| CardTexts {
                title: i18n.tr(service.title_key),
                description: i18n.tr(service.desc_key),
            })
            .collect();
    }
}
