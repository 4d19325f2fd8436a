// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column, capped at the content width and
//! centered in the window.

use super::{Message, Page};
use crate::ui::design_tokens::sizing;
use crate::ui::layout::LayoutTier;
use crate::ui::theming::ThemeConfig;
use crate::ui::{about, contact_form, footer, header, main_screen, services, styles};
use iced::{
    widget::{container, scrollable, Column},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub theme: &'a ThemeConfig,
    pub layout: LayoutTier,
}

/// Renders the whole page top to bottom.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        page,
        theme,
        layout,
    } = ctx;

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([0.0, theme.spacing.md])
        .push(
            page.header
                .view(header::ViewContext { theme })
                .map(Message::Header),
        )
        .push(page.main_screen.view(main_screen::ViewContext { theme }))
        .push(page.services.view(services::ViewContext { theme, layout }))
        .push(page.about.view(about::ViewContext { theme, layout }))
        .push(
            page.contact_form
                .view(contact_form::ViewContext { theme })
                .map(Message::ContactForm),
        )
        .push(page.footer.view(footer::ViewContext { theme }));

    let scroll = scrollable(container(content).center_x(Length::Fill)).height(Length::Fill);

    container(scroll)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(theme.colors.background))
        .into()
}
